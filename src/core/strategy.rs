//! Closed dispatch from a conversion method to its strategy

use tracing::debug;

use crate::core::models::ConversionMethod;
use crate::processors::charmap::{map_text, ARABIZI_MAP, LATIN_MAP};
use crate::processors::hash::hash_slug;
use crate::processors::transliteration::transliterate_any;
use crate::providers::TranslationProvider;

/// Run the strategy for `method` over `text`
///
/// Returns `None` when the method defers to the host: `None` itself, or
/// `Translate` without a provider.
pub async fn convert(
    method: ConversionMethod,
    text: &str,
    provider: Option<&dyn TranslationProvider>,
) -> Option<String> {
    match method {
        ConversionMethod::None => None,
        ConversionMethod::Transliterate => Some(transliterate_any(text)),
        ConversionMethod::CustomTransliterate => Some(map_text(text, &LATIN_MAP)),
        ConversionMethod::Arabizi => Some(map_text(text, &ARABIZI_MAP)),
        ConversionMethod::Hash => Some(hash_slug(text)),
        ConversionMethod::Translate => match provider {
            Some(provider) => Some(provider.translate(text).await),
            None => {
                debug!("No translation provider available, leaving slug to the host");
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_none_defers() {
        assert_eq!(convert(ConversionMethod::None, "مرحبا", None).await, None);
    }

    #[tokio::test]
    async fn test_map_strategies() {
        assert_eq!(
            convert(ConversionMethod::CustomTransliterate, "مرحبا", None).await,
            Some("mrhba".to_string())
        );
        assert_eq!(
            convert(ConversionMethod::Arabizi, "مرحبا", None).await,
            Some("mr7ba".to_string())
        );
    }

    #[tokio::test]
    async fn test_hash_strategy() {
        let slug = convert(ConversionMethod::Hash, "مرحبا بالعالم", None)
            .await
            .unwrap();
        assert_eq!(slug.len(), 8);
        assert_eq!(slug, hash_slug("مرحبا بالعالم"));
    }

    #[tokio::test]
    async fn test_translate_without_provider_defers() {
        assert_eq!(convert(ConversionMethod::Translate, "مرحبا", None).await, None);
    }

    #[tokio::test]
    async fn test_transliterate_never_fails() {
        let out = convert(ConversionMethod::Transliterate, "Café مرحبا", None)
            .await
            .unwrap();
        assert!(out.starts_with("cafe"));
    }
}
