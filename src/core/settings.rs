//! Settings-save boundary
//!
//! Turns raw form input into the settings to persist. Only the selected
//! translation provider has its credential checked, and that check includes
//! one live translation call.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{info, warn};

use crate::core::config::SlugSettings;
use crate::core::errors::Result;
use crate::core::models::{ConversionMethod, RawCredential};
use crate::processors::normalizer::sanitize_text_field;
use crate::providers::ProviderRegistry;

/// Raw settings form submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsInput {
    /// Requested method name
    #[serde(default)]
    pub method: Option<String>,
    /// Requested provider id
    #[serde(default)]
    pub translation_service: Option<String>,
    /// Raw keys by provider id
    #[serde(default)]
    pub api_keys: HashMap<String, String>,
    /// Raw custom endpoint
    #[serde(default)]
    pub custom_api_endpoint: Option<String>,
    /// Regenerate flag checkbox
    #[serde(default)]
    pub regenerate_on_change: bool,
}

fn clean(value: Option<&str>) -> Option<String> {
    value.map(sanitize_text_field).filter(|v| !v.is_empty())
}

/// Produce the settings to persist from `input`
///
/// On error the caller keeps `previous` untouched. Credentials of providers
/// other than the selected one are carried over as they were.
pub async fn sanitize_settings(
    previous: &SlugSettings,
    input: &SettingsInput,
    registry: &ProviderRegistry,
) -> Result<SlugSettings> {
    let mut settings = previous.clone();

    settings.method = match clean(input.method.as_deref()) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("{}, keeping '{}'", e, previous.method);
            previous.method
        }),
        None => previous.method,
    };

    settings.regenerate_on_change = input.regenerate_on_change;

    if settings.method != ConversionMethod::Translate {
        return Ok(settings);
    }

    let service = clean(input.translation_service.as_deref())
        .unwrap_or_else(|| previous.translation_service.clone());
    let provider = registry.require(&service)?;

    let raw = RawCredential {
        key: input.api_keys.get(&service).cloned().unwrap_or_default(),
        endpoint: input.custom_api_endpoint.clone().unwrap_or_default(),
    };
    let credential = provider.validate_credential(&raw).await?;

    info!("Validated credential for '{}'", provider.label());

    settings
        .api_keys
        .insert(service.clone(), credential.key().to_string());
    if let Some(endpoint) = credential.endpoint() {
        settings.custom_api_endpoint = Some(endpoint.to_string());
    }
    settings.translation_service = service;

    Ok(settings)
}
