//! Core data models for slug conversion

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::errors::TranslationError;

/// Strategy used to turn an Arabic title into slug text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionMethod {
    /// Leave the slug to the host
    #[default]
    None,
    /// Any-script to Latin transliteration, then accent stripping
    #[serde(alias = "wp_transliteration")]
    Transliterate,
    /// Table-driven phonetic Latin transliteration
    #[serde(rename = "custom_transliteration", alias = "custom_transliterate")]
    CustomTransliterate,
    /// 3arabizi digit substitution
    #[serde(alias = "3arabizi")]
    Arabizi,
    /// Short content-addressed identifier
    Hash,
    /// Machine translation to English
    #[serde(alias = "translation")]
    Translate,
}

impl ConversionMethod {
    /// Every method, in settings-page order
    pub const ALL: [ConversionMethod; 6] = [
        ConversionMethod::None,
        ConversionMethod::Transliterate,
        ConversionMethod::CustomTransliterate,
        ConversionMethod::Arabizi,
        ConversionMethod::Hash,
        ConversionMethod::Translate,
    ];

    /// Canonical configuration name
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionMethod::None => "none",
            ConversionMethod::Transliterate => "transliterate",
            ConversionMethod::CustomTransliterate => "custom_transliteration",
            ConversionMethod::Arabizi => "arabizi",
            ConversionMethod::Hash => "hash",
            ConversionMethod::Translate => "translate",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            ConversionMethod::None => "Leave the slug unchanged.",
            ConversionMethod::Transliterate => "Transliterate any script to ASCII Latin.",
            ConversionMethod::CustomTransliterate => "Map Arabic letters to Latin letters.",
            ConversionMethod::Arabizi => "Convert Arabic to 3arabizi numerals.",
            ConversionMethod::Hash => "Generate a short, unique hash from the title.",
            ConversionMethod::Translate => "Translate the title to English via the selected service.",
        }
    }
}

impl fmt::Display for ConversionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConversionMethod {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(ConversionMethod::None),
            "transliterate" | "wp_transliteration" => Ok(ConversionMethod::Transliterate),
            "custom_transliteration" | "custom_transliterate" => {
                Ok(ConversionMethod::CustomTransliterate)
            }
            "arabizi" | "3arabizi" => Ok(ConversionMethod::Arabizi),
            "hash" => Ok(ConversionMethod::Hash),
            "translate" | "translation" => Ok(ConversionMethod::Translate),
            other => Err(TranslationError::ConfigError {
                message: format!("Unknown conversion method: {}", other),
            }),
        }
    }
}

/// Body format flag sent to translation endpoints; titles are plain text
pub const TEXT_FORMAT: &str = "text";

/// Translation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate
    pub text: String,
    /// Target language code
    pub target_lang: String,
}

impl TranslationRequest {
    /// Request for `text` into `target_lang`
    pub fn new(text: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target_lang: target_lang.into(),
        }
    }
}

/// Secret a provider authenticates with
#[derive(Clone, PartialEq, Eq)]
pub enum ProviderCredential {
    /// Plain API key
    ApiKey(String),
    /// Operator-configured endpoint with its bearer token
    Endpoint {
        /// Endpoint URL
        endpoint: String,
        /// Bearer token
        key: String,
    },
}

impl ProviderCredential {
    /// The secret part of the credential
    pub fn key(&self) -> &str {
        match self {
            ProviderCredential::ApiKey(key) => key,
            ProviderCredential::Endpoint { key, .. } => key,
        }
    }

    /// Endpoint carried by the credential, if any
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            ProviderCredential::ApiKey(_) => None,
            ProviderCredential::Endpoint { endpoint, .. } => Some(endpoint),
        }
    }
}

impl fmt::Debug for ProviderCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderCredential::ApiKey(_) => f.debug_tuple("ApiKey").field(&"***").finish(),
            ProviderCredential::Endpoint { endpoint, .. } => f
                .debug_struct("Endpoint")
                .field("endpoint", endpoint)
                .field("key", &"***")
                .finish(),
        }
    }
}

/// Unvalidated credential input from the settings form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCredential {
    /// API key or token
    #[serde(default)]
    pub key: String,
    /// Endpoint URL, custom provider only
    #[serde(default)]
    pub endpoint: String,
}

impl RawCredential {
    /// Key-only input
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            endpoint: String::new(),
        }
    }

    /// Attach an endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

/// Post as seen by the host right before it is written
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    /// Title about to be saved
    pub title: String,
    /// Host's auto-draft placeholder state
    #[serde(default)]
    pub auto_draft: bool,
    /// Slug submitted with the save request, if any
    #[serde(default)]
    pub submitted_slug: Option<String>,
    /// Title currently stored for an existing post
    #[serde(default)]
    pub stored_title: Option<String>,
    /// Slug the host already computed, used as legalization fallback
    #[serde(default)]
    pub current_slug: String,
}

impl PostDraft {
    /// Fresh save of `title` with no slug yet
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_from_str_accepts_aliases() {
        assert_eq!(
            "wp_transliteration".parse::<ConversionMethod>().unwrap(),
            ConversionMethod::Transliterate
        );
        assert_eq!(
            "translation".parse::<ConversionMethod>().unwrap(),
            ConversionMethod::Translate
        );
        assert_eq!(" Arabizi ".parse::<ConversionMethod>().unwrap(), ConversionMethod::Arabizi);
        assert!("rot13".parse::<ConversionMethod>().is_err());
    }

    #[test]
    fn test_method_round_trips_canonical_name() {
        for method in ConversionMethod::ALL {
            assert_eq!(method.as_str().parse::<ConversionMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_method_deserialize_alias() {
        let method: ConversionMethod = serde_json::from_str("\"wp_transliteration\"").unwrap();
        assert_eq!(method, ConversionMethod::Transliterate);
        let method: ConversionMethod = serde_json::from_str("\"custom_transliteration\"").unwrap();
        assert_eq!(method, ConversionMethod::CustomTransliterate);
    }

    #[test]
    fn test_method_default_is_none() {
        assert_eq!(ConversionMethod::default(), ConversionMethod::None);
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = ProviderCredential::Endpoint {
            endpoint: "https://mt.example.com".to_string(),
            key: "super-secret".to_string(),
        };
        let debug = format!("{:?}", credential);
        assert!(debug.contains("mt.example.com"));
        assert!(!debug.contains("super-secret"));
        assert_eq!(credential.key(), "super-secret");
    }

    #[test]
    fn test_translation_request_new() {
        let request = TranslationRequest::new("مرحبا", "en");
        assert_eq!(request.text, "مرحبا");
        assert_eq!(request.target_lang, "en");
    }
}
