//! Operator-configured translation endpoint
//!
//! POSTs `{"text", "target", "format"}` as JSON with a bearer token and reads
//! the translated text at a JSON pointer, or through a response parser hook.

use async_trait::async_trait;
use std::sync::Arc;

use crate::core::client::{RequestArgs, RequestContext, TranslationClient};
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{ProviderCredential, RawCredential, TranslationRequest, TEXT_FORMAT};
use crate::processors::normalizer::sanitize_text_field;
use crate::providers::google::VALIDATION_PROBE;
use crate::providers::TranslationProvider;

/// Registry id
pub const PROVIDER_ID: &str = "custom";

/// Where the translated text is expected by default
pub const DEFAULT_RESPONSE_POINTER: &str = "/translatedText";

/// Maps `(original text, decoded response)` to the translated text
pub type ResponseParser = Arc<dyn Fn(&str, &serde_json::Value) -> Option<String> + Send + Sync>;

/// Accept only absolute http(s) URLs
pub fn parse_endpoint(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let url = reqwest::Url::parse(raw).ok()?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Some(url.to_string()),
        _ => None,
    }
}

/// Custom endpoint provider
#[derive(Clone)]
pub struct CustomEndpointProvider {
    client: TranslationClient,
    credential: Option<ProviderCredential>,
    response_pointer: String,
    response_parser: Option<ResponseParser>,
}

impl CustomEndpointProvider {
    /// Create a provider; it has a credential only when both parts are present
    pub fn new(client: TranslationClient, endpoint: Option<String>, api_key: Option<String>) -> Self {
        let endpoint = endpoint.as_deref().and_then(parse_endpoint);
        let key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let credential = match (endpoint, key) {
            (Some(endpoint), Some(key)) => Some(ProviderCredential::Endpoint { endpoint, key }),
            _ => None,
        };

        Self {
            client,
            credential,
            response_pointer: DEFAULT_RESPONSE_POINTER.to_string(),
            response_parser: None,
        }
    }

    /// Read the translated text at another JSON pointer
    pub fn with_response_pointer(mut self, pointer: impl Into<String>) -> Self {
        self.response_pointer = pointer.into();
        self
    }

    /// Replace pointer lookup with a parser hook
    pub fn with_response_parser(mut self, parser: ResponseParser) -> Self {
        self.response_parser = Some(parser);
        self
    }

    fn build_args(&self, request: &TranslationRequest, key: &str) -> RequestArgs {
        RequestArgs::json(
            self.client.timeout(),
            serde_json::json!({
                "text": request.text,
                "target": request.target_lang,
                "format": TEXT_FORMAT,
            }),
        )
        .with_header("Authorization", format!("Bearer {}", key))
    }

    fn extract(&self, text: &str, json: &serde_json::Value) -> Result<String> {
        let translated = match &self.response_parser {
            Some(parser) => parser(text, json),
            None => json
                .pointer(&self.response_pointer)
                .and_then(|v| v.as_str())
                .map(|s| s.to_string()),
        };

        translated.ok_or_else(|| TranslationError::SchemaError {
            message: format!(
                "No translated text at '{}' in custom API response",
                self.response_pointer
            ),
        })
    }

    async fn do_request(&self, text: &str, endpoint: &str, key: &str) -> Result<String> {
        let request = TranslationRequest::new(text, self.client.target_lang());
        let context = RequestContext {
            provider: PROVIDER_ID.to_string(),
            endpoint: endpoint.to_string(),
            text: text.to_string(),
        };

        let json = self
            .client
            .post(&context, self.build_args(&request, key))
            .await?;

        self.extract(text, &json)
    }
}

impl std::fmt::Debug for CustomEndpointProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomEndpointProvider")
            .field("credential", &self.credential)
            .field("response_pointer", &self.response_pointer)
            .field("response_parser", &self.response_parser.is_some())
            .finish()
    }
}

#[async_trait]
impl TranslationProvider for CustomEndpointProvider {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    fn label(&self) -> &str {
        "Custom API"
    }

    fn credential(&self) -> Option<&ProviderCredential> {
        self.credential.as_ref()
    }

    async fn request_translation(
        &self,
        text: &str,
        credential: &ProviderCredential,
    ) -> Result<String> {
        let endpoint = credential
            .endpoint()
            .ok_or_else(|| TranslationError::MissingCredential {
                provider: PROVIDER_ID.to_string(),
            })?;
        self.do_request(text, endpoint, credential.key()).await
    }

    async fn validate_credential(&self, raw: &RawCredential) -> Result<ProviderCredential> {
        let endpoint = parse_endpoint(&raw.endpoint).ok_or_else(|| {
            TranslationError::ValidationError {
                reason: "Custom API endpoint is invalid.".to_string(),
            }
        })?;

        let key = sanitize_text_field(&raw.key);
        if key.is_empty() {
            return Err(TranslationError::ValidationError {
                reason: "Custom API key cannot be empty.".to_string(),
            });
        }

        self.do_request(VALIDATION_PROBE, &endpoint, &key)
            .await
            .map_err(|e| e.into_validation("Custom API validation failed."))?;

        Ok(ProviderCredential::Endpoint { endpoint, key })
    }
}
