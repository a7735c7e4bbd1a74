//! DeepL API provider for machine translation
//!
//! This module integrates with the DeepL v2 `translate` endpoint. Each call
//! translates exactly one fragment; the response must carry exactly one
//! translation or the call fails.
//!
//! # Authentication
//!
//! The API key is sent as `Authorization: DeepL-Auth-Key <key>`. Keys for the
//! free tier must be used with `https://api-free.deepl.com/v2/translate`.
//!
//! # Example
//!
//! ```ignore
//! use i18n_sync::mt::{DeeplProvider, MachineTranslator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = DeeplProvider::new(
//!         DeeplProvider::DEFAULT_ENDPOINT.to_string(),
//!         std::env::var("DEEPL_API_KEY")?,
//!     )?;
//!     let result = provider.translate("Hello, world!", "en", "de").await?;
//!     println!("{}", result);
//!     Ok(())
//! }
//! ```

use crate::mt::error::{MtError, MtResult};
use crate::mt::translator::{MachineTranslator, deepl_language_code, validate_locale};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request body accepted by the DeepL `translate` endpoint
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: [&'a str; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    source_lang: Option<String>,
    target_lang: String,
    tag_handling: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    text: String,
}

/// DeepL API v2 provider
#[derive(Clone)]
pub struct DeeplProvider {
    /// API key for authentication
    api_key: String,
    /// HTTP client for async requests
    client: reqwest::Client,
    /// Full URL of the translate endpoint
    endpoint: String,
}

impl DeeplProvider {
    /// Endpoint for DeepL API Free accounts
    pub const DEFAULT_ENDPOINT: &'static str = "https://api-free.deepl.com/v2/translate";

    /// Upper bound for a single translation request
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a new DeeplProvider for `endpoint` authenticated with `api_key`
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(MtError::Config)` - If the API key or endpoint is empty, or the
    ///   HTTP client cannot be built
    pub fn new(endpoint: String, api_key: String) -> MtResult<Self> {
        Self::with_timeout(endpoint, api_key, Self::REQUEST_TIMEOUT)
    }

    /// Same as [`DeeplProvider::new`] with a custom request timeout
    pub fn with_timeout(endpoint: String, api_key: String, timeout: Duration) -> MtResult<Self> {
        if api_key.trim().is_empty() {
            return Err(MtError::Config("API key cannot be empty".to_string()));
        }
        if endpoint.trim().is_empty() {
            return Err(MtError::Config("API endpoint cannot be empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MtError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            client,
            endpoint,
        })
    }

    fn build_request<'a>(
        text: &'a str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<TranslateRequest<'a>> {
        let source_lang = if source_locale.is_empty() {
            None
        } else {
            validate_locale(source_locale)?;
            Some(deepl_language_code(source_locale))
        };
        validate_locale(target_locale)?;

        Ok(TranslateRequest {
            text: [text],
            source_lang,
            target_lang: deepl_language_code(target_locale),
            tag_handling: "html",
        })
    }
}

impl std::fmt::Debug for DeeplProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeeplProvider")
            .field("api_key", &"***")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[async_trait]
impl MachineTranslator for DeeplProvider {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String> {
        let body = Self::build_request(text, source_locale, target_locale)?;

        if text.is_empty() {
            return Ok(String::new());
        }

        let response = self
            .client
            .post(&self.endpoint)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("DeepL-Auth-Key {}", self.api_key),
            )
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MtError::Request(format!(
                "API returned {}: {}",
                status, error_text
            )));
        }

        // Only a body that arrived but does not parse is a shape problem;
        // timeouts and broken connections while reading it are request errors
        let payload: TranslateResponse = response.json().await.map_err(|e| {
            if e.is_decode() {
                MtError::ResponseShape(format!("Failed to decode DeepL response: {}", e))
            } else {
                MtError::from(e)
            }
        })?;

        let count = payload.translations.len();
        let mut translations = payload.translations.into_iter();
        match (translations.next(), count) {
            (Some(translation), 1) => Ok(translation.text),
            _ => Err(MtError::ResponseShape(format!(
                "unexpected number of translations: {}",
                count
            ))),
        }
    }

    fn provider_name(&self) -> &str {
        "DeepL"
    }
}
