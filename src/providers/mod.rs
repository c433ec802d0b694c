//! Translation providers and the registry that owns them

pub mod custom;
pub mod google;

use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::core::client::TranslationClient;
use crate::core::config::SlugSettings;
use crate::core::errors::{ErrorKind, Result, TranslationError};
use crate::core::models::{ProviderCredential, RawCredential};

pub use custom::CustomEndpointProvider;
pub use google::GoogleTranslateProvider;

/// A remote service that turns text into English
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Registry key, e.g. `google`
    fn id(&self) -> &str;

    /// Human-readable name
    fn label(&self) -> &str;

    /// Credential in use, `None` when unconfigured
    fn credential(&self) -> Option<&ProviderCredential>;

    /// One classified round trip with the given credential
    async fn request_translation(
        &self,
        text: &str,
        credential: &ProviderCredential,
    ) -> Result<String>;

    /// Check raw settings input, including one live call
    ///
    /// Returns the sanitized credential to persist.
    async fn validate_credential(&self, raw: &RawCredential) -> Result<ProviderCredential>;

    /// Classified translation with the configured credential
    async fn try_translate(&self, text: &str) -> Result<String> {
        let credential = self
            .credential()
            .ok_or_else(|| TranslationError::MissingCredential {
                provider: self.id().to_string(),
            })?;
        self.request_translation(text, credential).await
    }

    /// Translate, falling back to `text` on any failure
    async fn translate(&self, text: &str) -> String {
        match self.try_translate(text).await {
            Ok(translated) => translated,
            Err(e) if e.kind() == ErrorKind::MissingCredential => {
                info!("No API key for '{}', skipping translation of {:?}", self.id(), text);
                text.to_string()
            }
            Err(e) => {
                warn!(
                    "{} translate error ({:?}): {}",
                    self.label(),
                    e.kind(),
                    e
                );
                text.to_string()
            }
        }
    }
}

/// Statically known provider constructors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Google Translate v2
    Google,
    /// Operator-configured endpoint
    Custom,
}

impl ProviderKind {
    /// Every built-in provider
    pub const ALL: [ProviderKind; 2] = [ProviderKind::Google, ProviderKind::Custom];

    /// Registry id of the built provider
    pub fn id(&self) -> &'static str {
        match self {
            ProviderKind::Google => google::PROVIDER_ID,
            ProviderKind::Custom => custom::PROVIDER_ID,
        }
    }

    /// Build the provider from persisted settings
    pub fn build(
        &self,
        settings: &SlugSettings,
        client: &TranslationClient,
    ) -> Box<dyn TranslationProvider> {
        let key = settings.api_key(self.id()).map(str::to_string);
        match self {
            ProviderKind::Google => Box::new(GoogleTranslateProvider::new(client.clone(), key)),
            ProviderKind::Custom => Box::new(CustomEndpointProvider::new(
                client.clone(),
                settings.custom_api_endpoint.clone(),
                key,
            )),
        }
    }
}

/// Provider id to provider instance
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Box<dyn TranslationProvider>>,
}

impl ProviderRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every known provider from settings
    pub fn from_settings(settings: &SlugSettings, client: &TranslationClient) -> Self {
        let mut registry = Self::new();
        for kind in ProviderKind::ALL {
            registry.register(kind.build(settings, client));
        }
        debug!("Registered {} translation providers", registry.len());
        registry
    }

    /// Add or replace a provider under its id
    pub fn register(&mut self, provider: Box<dyn TranslationProvider>) {
        self.providers.insert(provider.id().to_string(), provider);
    }

    /// Provider registered under `id`
    pub fn get(&self, id: &str) -> Option<&dyn TranslationProvider> {
        self.providers.get(id).map(|p| p.as_ref())
    }

    /// Look up a provider, failing with `UnknownProvider`
    pub fn require(&self, id: &str) -> Result<&dyn TranslationProvider> {
        self.get(id).ok_or_else(|| TranslationError::UnknownProvider {
            provider: id.to_string(),
        })
    }

    /// Registered ids, sorted
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of providers
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// True when no provider is registered
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.ids())
            .finish()
    }
}
