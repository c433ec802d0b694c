//! Content-addressed short slugs

use md5::{Digest, Md5};

/// Number of hex characters kept from the digest
pub const HASH_SLUG_LEN: usize = 8;

/// Letter prepended when the digest starts with a digit
pub const HASH_LETTER_PREFIX: char = 'h';

/// 8-character slug derived from the md5 of `text`
///
/// Deterministic; a leading digit is avoided by prefixing
/// [`HASH_LETTER_PREFIX`] to the first seven hex characters.
pub fn hash_slug(text: &str) -> String {
    let digest = hex::encode(Md5::digest(text.as_bytes()));
    let prefix = &digest[..HASH_SLUG_LEN];

    if prefix.starts_with(|c: char| c.is_ascii_digit()) {
        let mut slug = String::with_capacity(HASH_SLUG_LEN);
        slug.push(HASH_LETTER_PREFIX);
        slug.push_str(&prefix[..HASH_SLUG_LEN - 1]);
        slug
    } else {
        prefix.to_string()
    }
}
