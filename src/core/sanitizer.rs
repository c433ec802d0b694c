//! Final slug legalization, owned by the host

use regex::Regex;
use std::sync::LazyLock;

use crate::processors::transliteration::remove_accents;

static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new("[^a-z0-9]+").unwrap());

/// Host step that turns candidate text into a legal slug
pub trait SlugSanitizer: Send + Sync {
    /// Legalize `candidate`; an empty result yields `fallback`
    fn sanitize(&self, candidate: &str, fallback: &str) -> String;
}

/// Lowercase alphanumerics joined by single hyphens
#[derive(Debug, Clone, Copy, Default)]
pub struct DashSanitizer;

impl SlugSanitizer for DashSanitizer {
    fn sanitize(&self, candidate: &str, fallback: &str) -> String {
        let folded = remove_accents(candidate).to_lowercase();
        let dashed = DISALLOWED.replace_all(&folded, "-");
        let slug = dashed.trim_matches('-');

        if slug.is_empty() {
            fallback.to_string()
        } else {
            slug.to_string()
        }
    }
}

impl<F> SlugSanitizer for F
where
    F: Fn(&str, &str) -> String + Send + Sync,
{
    fn sanitize(&self, candidate: &str, fallback: &str) -> String {
        self(candidate, fallback)
    }
}
