//! Configuration management

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::errors::{Result, TranslationError};
use crate::core::models::ConversionMethod;

/// Environment variable prefix for settings overrides
pub const ENV_PREFIX: &str = "ARABIC_SLUGS";

/// Provider selected when none is configured
pub const DEFAULT_PROVIDER: &str = "google";

/// Outbound request settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Language titles are translated into
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_target_lang() -> String {
    "en".to_string()
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            target_lang: default_target_lang(),
        }
    }
}

impl HttpSettings {
    /// Timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Persisted slug settings, as the host stores them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugSettings {
    /// Active conversion method
    #[serde(default)]
    pub method: ConversionMethod,
    /// Provider id used by `translate`
    #[serde(default = "default_provider")]
    pub translation_service: String,
    /// API keys by provider id
    #[serde(default)]
    pub api_keys: HashMap<String, String>,
    /// Endpoint of the custom provider
    #[serde(default)]
    pub custom_api_endpoint: Option<String>,
    /// Rebuild the slug whenever the title changes
    #[serde(default)]
    pub regenerate_on_change: bool,
    /// Outbound request settings
    #[serde(default)]
    pub http: HttpSettings,
}

fn default_provider() -> String {
    DEFAULT_PROVIDER.to_string()
}

impl Default for SlugSettings {
    fn default() -> Self {
        Self {
            method: ConversionMethod::None,
            translation_service: default_provider(),
            api_keys: HashMap::new(),
            custom_api_endpoint: None,
            regenerate_on_change: false,
            http: HttpSettings::default(),
        }
    }
}

impl SlugSettings {
    /// Load settings from an optional file, overridden by `ARABIC_SLUGS__*` variables
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            let path = path.as_ref();
            debug!("Loading settings from {}", path.display());
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let settings: Self = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TranslationError::ConfigError {
            message: format!("Cannot read {}: {}", path.display(), e),
        })?;
        let settings: Self =
            serde_json::from_str(&content).map_err(|e| TranslationError::ConfigError {
                message: format!("Invalid settings JSON in {}: {}", path.display(), e),
            })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.http.timeout_ms == 0 {
            return Err(TranslationError::ConfigError {
                message: "http.timeout_ms must be greater than 0".to_string(),
            });
        }

        if self.http.target_lang.trim().is_empty() {
            return Err(TranslationError::ConfigError {
                message: "http.target_lang is required".to_string(),
            });
        }

        if self.method == ConversionMethod::Translate
            && self.api_key(&self.translation_service).is_none()
        {
            warn!(
                "Translation selected but no API key set for '{}'",
                self.translation_service
            );
        }

        Ok(())
    }

    /// Non-empty API key stored for a provider
    pub fn api_key(&self, provider: &str) -> Option<&str> {
        self.api_keys
            .get(provider)
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
    }
}
