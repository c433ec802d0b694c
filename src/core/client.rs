//! HTTP dispatch for translation providers with outcome classification

use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::config::HttpSettings;
use crate::core::errors::{Result, TranslationError};

/// Request body as sent on the wire
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// `application/x-www-form-urlencoded` pairs
    Form(Vec<(String, String)>),
    /// JSON document
    Json(serde_json::Value),
}

/// Arguments for one outbound translation request
#[derive(Debug, Clone, PartialEq)]
pub struct RequestArgs {
    /// Per-request timeout
    pub timeout: Duration,
    /// Extra headers, in order
    pub headers: Vec<(String, String)>,
    /// Payload
    pub body: RequestBody,
}

impl RequestArgs {
    /// Form-encoded request
    pub fn form(timeout: Duration, pairs: Vec<(String, String)>) -> Self {
        Self {
            timeout,
            headers: Vec::new(),
            body: RequestBody::Form(pairs),
        }
    }

    /// JSON request
    pub fn json(timeout: Duration, body: serde_json::Value) -> Self {
        Self {
            timeout,
            headers: Vec::new(),
            body: RequestBody::Json(body),
        }
    }

    /// Append a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// What a request filter gets to see besides the arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Provider id
    pub provider: String,
    /// Target URL
    pub endpoint: String,
    /// Text being translated
    pub text: String,
}

/// Externally registered request customization
///
/// Returning `None` means the filter produced nothing usable; the request
/// then goes out unmodified.
pub type RequestFilter = Arc<dyn Fn(RequestArgs, &RequestContext) -> Option<RequestArgs> + Send + Sync>;

/// Shared HTTP client used by every provider
#[derive(Clone)]
pub struct TranslationClient {
    client: reqwest::Client,
    timeout: Duration,
    target_lang: String,
    request_filter: Option<RequestFilter>,
}

impl TranslationClient {
    /// Create a client with the configured timeout
    ///
    /// Certificate verification stays enabled; there is no switch to turn it off.
    pub fn new(settings: &HttpSettings) -> Result<Self> {
        let timeout = settings.timeout();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranslationError::ConfigError {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            timeout,
            target_lang: settings.target_lang.clone(),
            request_filter: None,
        })
    }

    /// Register the request customization hook
    pub fn with_request_filter(mut self, filter: RequestFilter) -> Self {
        self.request_filter = Some(filter);
        self
    }

    /// Default per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Language every provider translates into
    pub fn target_lang(&self) -> &str {
        &self.target_lang
    }

    /// Run the request filter, keeping the original args on `None`
    pub fn apply_filter(&self, args: RequestArgs, context: &RequestContext) -> RequestArgs {
        let Some(filter) = &self.request_filter else {
            return args;
        };

        match filter(args.clone(), context) {
            Some(filtered) => filtered,
            None => {
                warn!(
                    "Request filter returned nothing for provider '{}', using unmodified request",
                    context.provider
                );
                args
            }
        }
    }

    /// POST once, without retry, and classify the outcome
    ///
    /// Returns the decoded JSON document on success.
    pub async fn post(&self, context: &RequestContext, args: RequestArgs) -> Result<serde_json::Value> {
        let args = self.apply_filter(args, context);

        let mut request = self
            .client
            .post(&context.endpoint)
            .timeout(args.timeout);

        for (name, value) in &args.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        request = match &args.body {
            RequestBody::Form(pairs) => request.form(pairs),
            RequestBody::Json(body) => request.json(body),
        };

        debug!(
            "POST {} for provider '{}' (timeout {:?})",
            context.endpoint, context.provider, args.timeout
        );

        let response = request
            .send()
            .await
            .map_err(|e| TranslationError::TransportError {
                message: e.to_string(),
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(TranslationError::HttpError {
                code: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| TranslationError::TransportError {
                message: e.to_string(),
            })?;

        if body.trim().is_empty() {
            return Err(TranslationError::EmptyBodyError);
        }

        serde_json::from_str(&body).map_err(|e| TranslationError::ParseError {
            message: e.to_string(),
        })
    }
}

impl fmt::Debug for TranslationClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationClient")
            .field("timeout", &self.timeout)
            .field("target_lang", &self.target_lang)
            .field("request_filter", &self.request_filter.is_some())
            .finish()
    }
}
