//! Custom error types for slug conversion and translation operations

use thiserror::Error;

/// Errors raised while translating titles or validating provider settings
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Request never produced a response (DNS, connect, TLS, timeout)
    #[error("Transport error: {message}")]
    TransportError {
        /// Underlying reqwest failure
        message: String,
    },

    /// Provider answered with a non-success status
    #[error("HTTP {code}: {message}")]
    HttpError {
        /// Status code
        code: u16,
        /// Canonical reason phrase
        message: String,
    },

    /// Provider answered 200 with nothing in the body
    #[error("Empty response body")]
    EmptyBodyError,

    /// Body was not valid JSON
    #[error("Invalid JSON in response: {message}")]
    ParseError {
        /// Decoder message
        message: String,
    },

    /// JSON was well formed but the translated text was not where expected
    #[error("Unexpected response shape: {message}")]
    SchemaError {
        /// What was missing
        message: String,
    },

    /// Credential rejected during an explicit validation action
    #[error("{reason}")]
    ValidationError {
        /// Human-readable reason shown on the settings page
        reason: String,
    },

    /// Provider has no credential configured
    #[error("No credential configured for provider '{provider}'")]
    MissingCredential {
        /// Provider id
        provider: String,
    },

    /// Requested provider is not in the registry
    #[error("Unknown translation provider: {provider}")]
    UnknownProvider {
        /// Requested id
        provider: String,
    },

    /// Invalid configuration value
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What is wrong
        message: String,
    },

    /// Settings could not be loaded
    #[error("Settings error: {0}")]
    SettingsError(#[from] config::ConfigError),
}

/// Discriminant of [`TranslationError`], cheap to compare and log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ErrorKind {
    Transport,
    Http,
    EmptyBody,
    Parse,
    Schema,
    Validation,
    MissingCredential,
    UnknownProvider,
    Config,
}

impl TranslationError {
    /// Kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslationError::TransportError { .. } => ErrorKind::Transport,
            TranslationError::HttpError { .. } => ErrorKind::Http,
            TranslationError::EmptyBodyError => ErrorKind::EmptyBody,
            TranslationError::ParseError { .. } => ErrorKind::Parse,
            TranslationError::SchemaError { .. } => ErrorKind::Schema,
            TranslationError::ValidationError { .. } => ErrorKind::Validation,
            TranslationError::MissingCredential { .. } => ErrorKind::MissingCredential,
            TranslationError::UnknownProvider { .. } => ErrorKind::UnknownProvider,
            TranslationError::ConfigError { .. } | TranslationError::SettingsError(_) => {
                ErrorKind::Config
            }
        }
    }

    /// Wrap this error as a user-facing validation failure
    pub fn into_validation(self, prefix: &str) -> TranslationError {
        match self {
            TranslationError::ValidationError { .. } => self,
            other => TranslationError::ValidationError {
                reason: format!("{} {}", prefix, other),
            },
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
