//! Arabic script detection

use unicode_script::{Script, UnicodeScript};

/// True when any code point in `text` belongs to the Arabic script
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(|c| c.script() == Script::Arabic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_arabic() {
        assert!(contains_arabic("مرحبا"));
        assert!(contains_arabic("Hello مرحبا 2024"));
        assert!(contains_arabic("ﻻ"));
    }

    #[test]
    fn test_latin_and_other_scripts_are_not_arabic() {
        assert!(!contains_arabic("Hello World"));
        assert!(!contains_arabic("Иван Петров"));
        assert!(!contains_arabic("שלום"));
        assert!(!contains_arabic(""));
    }
}
