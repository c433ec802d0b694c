//! Arabic diacritic (tashkeel) removal

/// Arabic diacritic ranges: Quranic marks, harakat, small high signs
const DIACRITIC_RANGES: [(char, char); 3] = [
    ('\u{0610}', '\u{061A}'),
    ('\u{064B}', '\u{065F}'),
    ('\u{06D6}', '\u{06ED}'),
];

/// Check if a character is an Arabic diacritical mark
#[inline]
pub fn is_diacritic(c: char) -> bool {
    DIACRITIC_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&c))
}

/// Remove Arabic diacritics, keeping every other character in order
pub fn strip_diacritics(text: &str) -> String {
    text.chars().filter(|&c| !is_diacritic(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_harakat() {
        // مَرْحَبًا -> مرحبا
        assert_eq!(strip_diacritics("مَرْحَبًا"), "مرحبا");
    }

    #[test]
    fn test_strip_shadda_and_quranic_marks() {
        assert_eq!(strip_diacritics("محمّد"), "محمد");
        assert_eq!(strip_diacritics("ب\u{0610}\u{06D6}ت"), "بت");
    }

    #[test]
    fn test_range_boundaries() {
        for c in ['\u{0610}', '\u{061A}', '\u{064B}', '\u{065F}', '\u{06D6}', '\u{06ED}'] {
            assert!(is_diacritic(c), "{:?} should be a diacritic", c);
        }
        for c in ['\u{060F}', '\u{061B}', '\u{064A}', '\u{0660}', '\u{06D5}', '\u{06EE}'] {
            assert!(!is_diacritic(c), "{:?} should not be a diacritic", c);
        }
    }

    #[test]
    fn test_no_diacritics_is_noop() {
        assert_eq!(strip_diacritics("hello world"), "hello world");
        assert_eq!(strip_diacritics(""), "");
    }
}
