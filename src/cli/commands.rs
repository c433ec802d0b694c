//! CLI command definitions and handlers

use clap::Subcommand;
use tracing::info;

use crate::core::client::TranslationClient;
use crate::core::config::SlugSettings;
use crate::core::models::{ConversionMethod, RawCredential};
use crate::core::pipeline::SlugPipeline;
use crate::providers::ProviderRegistry;

/// Commands for the Arabic slug harness
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Generate a slug for a title
    Slug {
        /// Post title
        title: String,

        /// Conversion method (overrides settings)
        #[arg(short, long)]
        method: Option<String>,

        /// Translation service id (overrides settings)
        #[arg(short, long)]
        provider: Option<String>,

        /// Slug used when the result legalizes to nothing
        #[arg(long, default_value = "")]
        fallback: String,
    },

    /// Validate a provider credential with one live call
    Validate {
        /// Translation service id
        #[arg(short, long)]
        provider: String,

        /// API key or token
        #[arg(short, long)]
        key: String,

        /// Endpoint URL (custom provider only)
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// List conversion methods
    Methods,
}

/// Apply command-line overrides on top of loaded settings
pub fn apply_overrides(
    mut settings: SlugSettings,
    method: Option<&str>,
    provider: Option<&str>,
) -> anyhow::Result<SlugSettings> {
    if let Some(method) = method {
        settings.method = method.parse::<ConversionMethod>()?;
    }
    if let Some(provider) = provider {
        settings.translation_service = provider.trim().to_string();
    }
    Ok(settings)
}

/// Handle slug command
pub async fn handle_slug(
    settings: SlugSettings,
    title: String,
    method: Option<String>,
    provider: Option<String>,
    fallback: String,
) -> anyhow::Result<()> {
    let settings = apply_overrides(settings, method.as_deref(), provider.as_deref())?;

    info!("Generating slug with method '{}'", settings.method);

    let pipeline = SlugPipeline::from_settings(settings)?;
    let slug = pipeline.generate_slug(&title, &fallback).await;

    println!("{}", slug);

    Ok(())
}

/// Handle validate command
pub async fn handle_validate(
    settings: SlugSettings,
    provider: String,
    key: String,
    endpoint: Option<String>,
) -> anyhow::Result<()> {
    let client = TranslationClient::new(&settings.http)?;
    let registry = ProviderRegistry::from_settings(&settings, &client);
    let provider = registry.require(provider.trim())?;

    info!("Validating credential for '{}'", provider.id());

    let mut raw = RawCredential::new(key);
    if let Some(endpoint) = endpoint {
        raw = raw.with_endpoint(endpoint);
    }

    match provider.validate_credential(&raw).await {
        Ok(credential) => {
            println!("✅ {} credential is valid", provider.label());
            if let Some(endpoint) = credential.endpoint() {
                println!("   Endpoint: {}", endpoint);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            Err(e.into())
        }
    }
}

/// Handle methods command
pub fn handle_methods(settings: &SlugSettings) -> anyhow::Result<()> {
    println!("📋 Conversion methods:");
    for method in ConversionMethod::ALL {
        let marker = if method == settings.method { "*" } else { " " };
        println!(" {} {:<24} {}", marker, method.as_str(), method.description());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_parse_slug_command() {
        let harness =
            Harness::try_parse_from(["arabic-slugs", "slug", "مرحبا", "--method", "arabizi"]).unwrap();
        assert_eq!(
            harness.command,
            Commands::Slug {
                title: "مرحبا".to_string(),
                method: Some("arabizi".to_string()),
                provider: None,
                fallback: String::new(),
            }
        );
    }

    #[test]
    fn test_validate_requires_provider_and_key() {
        assert!(Harness::try_parse_from(["arabic-slugs", "validate", "--key", "k"]).is_err());
        assert!(Harness::try_parse_from([
            "arabic-slugs",
            "validate",
            "--provider",
            "custom",
            "--key",
            "k",
            "--endpoint",
            "https://mt.example.com"
        ])
        .is_ok());
    }

    #[test]
    fn test_apply_overrides() {
        let settings = apply_overrides(SlugSettings::default(), Some("3arabizi"), Some(" custom "))
            .unwrap();
        assert_eq!(settings.method, ConversionMethod::Arabizi);
        assert_eq!(settings.translation_service, "custom");

        assert!(apply_overrides(SlugSettings::default(), Some("pig_latin"), None).is_err());
    }
}
