//! Table-driven Arabic to Latin character mapping
//!
//! Two maps share one base table. They differ only in the emphatic and
//! guttural consonants, which the Latin map writes with letters and the
//! 3arabizi map writes with digits.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::processors::diacritics::strip_diacritics;
use crate::processors::normalizer::normalize_slug_text;

/// Entries shared by both maps
const BASE_ENTRIES: &[(char, &str)] = &[
    // Alef and hamza carriers
    ('ا', "a"),
    ('أ', "a"),
    ('إ', "i"),
    ('آ', "a"),
    ('ٱ', "a"),
    ('ؤ', "u"),
    ('ئ', "i"),
    ('ى', "a"),
    ('ة', "h"),
    // Letters
    ('ب', "b"),
    ('ت', "t"),
    ('ج', "j"),
    ('د', "d"),
    ('ذ', "dh"),
    ('ر', "r"),
    ('ز', "z"),
    ('س', "s"),
    ('ش', "sh"),
    ('ظ', "z"),
    ('غ', "gh"),
    ('ف', "f"),
    ('ك', "k"),
    ('ل', "l"),
    ('م', "m"),
    ('ن', "n"),
    ('ه', "h"),
    ('و', "w"),
    ('ي', "y"),
    // Extended letters (Persian, Urdu, Maghrebi loans)
    ('پ', "p"),
    ('چ', "ch"),
    ('ژ', "zh"),
    ('ڤ', "v"),
    ('گ', "g"),
    ('ک', "k"),
    ('ی', "y"),
    // Lam-alef ligatures, isolated and final forms
    ('ﻻ', "la"),
    ('ﻼ', "la"),
    ('ﻷ', "la"),
    ('ﻸ', "la"),
    ('ﻹ', "li"),
    ('ﻺ', "li"),
    ('ﻵ', "la"),
    ('ﻶ', "la"),
    // Arabic-Indic digits
    ('٠', "0"),
    ('١', "1"),
    ('٢', "2"),
    ('٣', "3"),
    ('٤', "4"),
    ('٥', "5"),
    ('٦', "6"),
    ('٧', "7"),
    ('٨', "8"),
    ('٩', "9"),
    // Extended Arabic-Indic digits
    ('۰', "0"),
    ('۱', "1"),
    ('۲', "2"),
    ('۳', "3"),
    ('۴', "4"),
    ('۵', "5"),
    ('۶', "6"),
    ('۷', "7"),
    ('۸', "8"),
    ('۹', "9"),
    // Separators kept verbatim
    ('-', "-"),
    ('_', "_"),
];

/// Phonetic Latin substitutes
const LATIN_ENTRIES: &[(char, &str)] = &[
    ('ء', ""),
    ('ث', "th"),
    ('ح', "h"),
    ('خ', "kh"),
    ('ص', "s"),
    ('ض', "d"),
    ('ط', "t"),
    ('ع', ""),
    ('ق', "q"),
];

/// 3arabizi digit substitutes
const ARABIZI_ENTRIES: &[(char, &str)] = &[
    ('ء', "2"),
    ('ث', "4"),
    ('ح', "7"),
    ('خ', "5"),
    ('ص', "9"),
    ('ض', "9"),
    ('ط', "6"),
    ('ع', "3"),
    ('ق', "8"),
];

/// Read-only mapping from a single character to its replacement
#[derive(Debug)]
pub struct CharacterMap {
    entries: HashMap<char, &'static str>,
}

impl CharacterMap {
    fn build(overrides: &[(char, &'static str)]) -> Self {
        let entries = BASE_ENTRIES
            .iter()
            .chain(overrides.iter())
            .copied()
            .collect();
        Self { entries }
    }

    /// Substitute for `c`, `None` when unmapped
    pub fn get(&self, c: char) -> Option<&'static str> {
        self.entries.get(&c).copied()
    }

    /// Number of mapped characters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is mapped
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over mapped characters
    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.keys().copied()
    }
}

/// Map used by the `custom_transliteration` method
pub static LATIN_MAP: LazyLock<CharacterMap> =
    LazyLock::new(|| CharacterMap::build(LATIN_ENTRIES));

/// Map used by the `arabizi` method
pub static ARABIZI_MAP: LazyLock<CharacterMap> =
    LazyLock::new(|| CharacterMap::build(ARABIZI_ENTRIES));

/// Strip diacritics, map each character through `map`, then normalize
///
/// Mapped characters emit their substitute (possibly empty), ASCII letters
/// and digits pass through, anything else becomes a space.
pub fn map_text(text: &str, map: &CharacterMap) -> String {
    let stripped = strip_diacritics(text);
    let mut out = String::with_capacity(stripped.len());

    for c in stripped.chars() {
        if let Some(substitute) = map.get(c) {
            out.push_str(substitute);
        } else if c.is_ascii_alphanumeric() {
            out.push(c);
        } else {
            out.push(' ');
        }
    }

    normalize_slug_text(&out)
}

/// Phonetic Latin transliteration
pub fn transliterate_latin(text: &str) -> String {
    map_text(text, &LATIN_MAP)
}

/// 3arabizi transliteration
pub fn transliterate_arabizi(text: &str) -> String {
    map_text(text, &ARABIZI_MAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::script::contains_arabic;

    #[test]
    fn test_known_vector_latin() {
        assert_eq!(transliterate_latin("مرحبا"), "mrhba");
    }

    #[test]
    fn test_known_vector_arabizi() {
        assert_eq!(transliterate_arabizi("مرحبا"), "mr7ba");
    }

    #[test]
    fn test_two_words() {
        assert_eq!(transliterate_latin("مرحبا بالعالم"), "mrhba balalm");
        assert_eq!(transliterate_arabizi("مرحبا بالعالم"), "mr7ba bal3alm");
    }

    #[test]
    fn test_maps_differ_only_in_overrides() {
        for c in LATIN_MAP.keys() {
            let latin = LATIN_MAP.get(c);
            let arabizi = ARABIZI_MAP.get(c);
            let overridden = LATIN_ENTRIES.iter().any(|&(k, _)| k == c);
            if !overridden {
                assert_eq!(latin, arabizi, "{:?} should map identically", c);
            }
        }
        assert_eq!(LATIN_MAP.len(), ARABIZI_MAP.len());
    }

    #[test]
    fn test_empty_substitutes() {
        // ع and ء vanish in the Latin map
        assert_eq!(transliterate_latin("عمر"), "mr");
        assert_eq!(transliterate_arabizi("عمر"), "3mr");
        assert_eq!(transliterate_latin("ماء"), "ma");
        assert_eq!(transliterate_arabizi("ماء"), "ma2");
    }

    #[test]
    fn test_diacritics_are_removed_before_mapping() {
        assert_eq!(transliterate_arabizi("مَرْحَبًا"), "mr7ba");
    }

    #[test]
    fn test_ligature_has_own_entry() {
        assert_eq!(transliterate_latin("ﻻ"), "la");
        assert_eq!(transliterate_arabizi("ﻻ"), "la");
    }

    #[test]
    fn test_ascii_passthrough_and_lowercase() {
        assert_eq!(transliterate_latin("Rust 2024"), "rust 2024");
        assert_eq!(transliterate_arabizi("Hello-World_1"), "hello-world_1");
    }

    #[test]
    fn test_punctuation_becomes_single_space() {
        assert_eq!(transliterate_latin("مرحبا!! ؟ عالم"), "mrhba alm");
        assert_eq!(transliterate_arabizi("  ،مرحبا،  "), "mr7ba");
    }

    #[test]
    fn test_arabic_indic_digits() {
        assert_eq!(transliterate_arabizi("سنة ٢٠٢٤"), "snh 2024");
        assert_eq!(transliterate_latin("۱۲"), "12");
    }

    #[test]
    fn test_no_arabic_left_after_mapping() {
        let title = "كيف تتعلم البرمجة في ٣٠ يوماً؟ ﻻ تستسلم";
        assert!(!contains_arabic(&transliterate_latin(title)));
        assert!(!contains_arabic(&transliterate_arabizi(title)));
    }

    #[test]
    fn test_unmapped_script_becomes_space() {
        assert_eq!(transliterate_latin("abc日本def"), "abc def");
    }

    #[test]
    fn test_dash_and_underscore_kept_by_both_maps() {
        assert_eq!(transliterate_latin("مرحبا_بالعالم-2"), "mrhba_balalm-2");
        assert_eq!(transliterate_arabizi("مرحبا_بالعالم-2"), "mr7ba_bal3alm-2");
    }
}
