//! Any-script to ASCII Latin transliteration with an accent-stripping fallback

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Whether the any-script to Latin stage is compiled in
pub const ANY_LATIN_AVAILABLE: bool = cfg!(feature = "any-latin");

/// Remove combining accents via NFD decomposition
pub fn remove_accents(text: &str) -> String {
    text.nfd().filter(|&c| !is_combining_mark(c)).collect()
}

#[cfg(feature = "any-latin")]
fn any_to_latin(text: &str) -> String {
    deunicode::deunicode(text)
}

#[cfg(not(feature = "any-latin"))]
fn any_to_latin(text: &str) -> String {
    text.to_string()
}

/// Transliterate to Latin (when available), strip accents, lowercase
///
/// Never fails: without the any-to-Latin stage the result is the
/// lowercased, accent-stripped input.
pub fn transliterate_any(text: &str) -> String {
    let latin = any_to_latin(text);
    remove_accents(&latin).to_lowercase()
}
