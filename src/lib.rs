//! Arabic Slugs - friendly URL slugs for Arabic titles
//!
//! This library turns Arabic post titles into Latin slugs by transliteration,
//! 3arabizi digit mapping, short content hashes or machine translation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod processors;
pub mod providers;

// Re-export key types for convenience
pub use core::{
    config::SlugSettings,
    errors::{ErrorKind, TranslationError},
    models::{ConversionMethod, PostDraft, ProviderCredential, RawCredential},
    pipeline::{SaveOutcome, SkipReason, SlugPipeline},
    sanitizer::{DashSanitizer, SlugSanitizer},
    settings::{sanitize_settings, SettingsInput},
};

pub use providers::{ProviderRegistry, TranslationProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
