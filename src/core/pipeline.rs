//! Slug pipeline: detect Arabic, run the configured strategy, legalize

use tracing::debug;

use crate::core::client::TranslationClient;
use crate::core::config::SlugSettings;
use crate::core::errors::Result;
use crate::core::models::{ConversionMethod, PostDraft};
use crate::core::sanitizer::{DashSanitizer, SlugSanitizer};
use crate::core::strategy;
use crate::processors::script::contains_arabic;
use crate::providers::{ProviderRegistry, TranslationProvider};

/// Why a save left the slug alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Host placeholder draft
    AutoDraft,
    /// Title is blank
    EmptyTitle,
    /// Title has no Arabic script
    NotArabic,
    /// Save already carries a slug
    SlugExists,
    /// Title equals the stored one
    TitleUnchanged,
    /// Method is `none`
    MethodNone,
    /// Method is `translate` but the selected provider is not registered
    ProviderUnavailable,
}

/// Outcome of the save-time hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Write this slug
    Regenerated(String),
    /// Keep whatever the host has
    Skipped(SkipReason),
}

/// Decide whether a save should rebuild the slug
pub fn regeneration_check(draft: &PostDraft, settings: &SlugSettings) -> std::result::Result<(), SkipReason> {
    if draft.auto_draft {
        return Err(SkipReason::AutoDraft);
    }

    if draft.title.trim().is_empty() {
        return Err(SkipReason::EmptyTitle);
    }

    if !contains_arabic(&draft.title) {
        return Err(SkipReason::NotArabic);
    }

    let has_slug = draft
        .submitted_slug
        .as_deref()
        .is_some_and(|s| !s.is_empty());

    if !settings.regenerate_on_change && has_slug {
        return Err(SkipReason::SlugExists);
    }

    if settings.regenerate_on_change && draft.stored_title.as_deref() == Some(draft.title.as_str()) {
        return Err(SkipReason::TitleUnchanged);
    }

    if settings.method == ConversionMethod::None {
        return Err(SkipReason::MethodNone);
    }

    Ok(())
}

/// Per-process context threaded into every slug call
pub struct SlugPipeline {
    settings: SlugSettings,
    registry: ProviderRegistry,
    sanitizer: Box<dyn SlugSanitizer>,
}

impl SlugPipeline {
    /// Create a pipeline with the default sanitizer
    pub fn new(settings: SlugSettings, registry: ProviderRegistry) -> Self {
        Self {
            settings,
            registry,
            sanitizer: Box::new(DashSanitizer),
        }
    }

    /// Build the HTTP client and provider registry from settings
    pub fn from_settings(settings: SlugSettings) -> Result<Self> {
        settings.validate()?;
        let client = TranslationClient::new(&settings.http)?;
        let registry = ProviderRegistry::from_settings(&settings, &client);
        Ok(Self::new(settings, registry))
    }

    /// Use the host's own slug legalization
    pub fn with_sanitizer(mut self, sanitizer: impl SlugSanitizer + 'static) -> Self {
        self.sanitizer = Box::new(sanitizer);
        self
    }

    /// Active settings
    pub fn settings(&self) -> &SlugSettings {
        &self.settings
    }

    /// Registered providers
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Provider selected for translation, if registered
    pub fn active_provider(&self) -> Option<&dyn TranslationProvider> {
        let id = &self.settings.translation_service;
        let provider = self.registry.get(id);
        if provider.is_none() {
            debug!("Translation service '{}' is not registered", id);
        }
        provider
    }

    /// Raw strategy output for `title`, `None` when the host default applies
    pub async fn candidate(&self, title: &str) -> Option<String> {
        if self.settings.method == ConversionMethod::None || !contains_arabic(title) {
            return None;
        }

        let provider = match self.settings.method {
            ConversionMethod::Translate => self.active_provider(),
            _ => None,
        };

        strategy::convert(self.settings.method, title, provider).await
    }

    /// Slug for `title`, or `title` unchanged when the host default applies
    ///
    /// `fallback_slug` is what the host uses when the candidate legalizes
    /// to nothing.
    pub async fn generate_slug(&self, title: &str, fallback_slug: &str) -> String {
        match self.candidate(title).await {
            Some(candidate) => {
                let slug = self.sanitizer.sanitize(&candidate, fallback_slug);
                debug!(
                    "Generated slug {:?} for {:?} with method {}",
                    slug, title, self.settings.method
                );
                slug
            }
            None => title.to_string(),
        }
    }

    /// Save-time hook: rebuild the slug when the regeneration policy allows
    pub async fn slug_on_save(&self, draft: &PostDraft) -> SaveOutcome {
        if let Err(reason) = regeneration_check(draft, &self.settings) {
            debug!("Keeping slug for {:?}: {:?}", draft.title, reason);
            return SaveOutcome::Skipped(reason);
        }

        match self.candidate(&draft.title).await {
            Some(candidate) => SaveOutcome::Regenerated(
                self.sanitizer.sanitize(&candidate, &draft.current_slug),
            ),
            None => {
                debug!("Keeping slug for {:?}: no translation provider", draft.title);
                SaveOutcome::Skipped(SkipReason::ProviderUnavailable)
            }
        }
    }
}

impl std::fmt::Debug for SlugPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlugPipeline")
            .field("method", &self.settings.method)
            .field("translation_service", &self.settings.translation_service)
            .field("registry", &self.registry)
            .finish()
    }
}
