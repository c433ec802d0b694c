//! Pure text processors behind the conversion strategies

pub mod charmap;
pub mod diacritics;
pub mod hash;
pub mod normalizer;
pub mod script;
pub mod transliteration;
