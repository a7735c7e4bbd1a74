//! Machine Translation trait and utilities
//!
//! This module defines the `MachineTranslator` trait for provider abstraction,
//! so the sync engine can run against DeepL in production and against a
//! deterministic mock in tests.
//!
//! # Example
//!
//! ```ignore
//! use i18n_sync::mt::{DeeplProvider, MachineTranslator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = DeeplProvider::new(
//!         "https://api-free.deepl.com/v2/translate".to_string(),
//!         "your-api-key".to_string(),
//!     )?;
//!
//!     let result = provider.translate("Hello, world!", "en", "de").await?;
//!     println!("{}", result); // "Hallo, Welt!"
//!
//!     Ok(())
//! }
//! ```

use crate::mt::error::{MtError, MtResult};
use async_trait::async_trait;

/// Generic trait for machine translation providers
///
/// Implementations translate exactly one fragment per `translate` call. Any
/// error is final: callers never retry.
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate a single text string from source to target locale
    ///
    /// # Arguments
    ///
    /// * `text` - The text to translate
    /// * `source_locale` - Source language code (e.g., "en"); empty lets the
    ///   provider detect the source language
    /// * `target_locale` - Target language code (e.g., "de", "pt-BR")
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String>;

    /// Translate a list of strings one request at a time
    ///
    /// Output order matches input order. The first failing element aborts the
    /// whole batch and nothing is returned for the elements before it.
    async fn translate_batch(
        &self,
        texts: &[String],
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<Vec<String>> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.translate(text, source_locale, target_locale).await?);
        }
        Ok(results)
    }

    /// Get the name of this translation provider, used in log output
    fn provider_name(&self) -> &str;
}

/// Validate that a locale code is in acceptable format
///
/// Checks that the locale code is non-empty and contains only ASCII
/// alphanumeric characters, hyphens, and underscores.
pub fn validate_locale(locale: &str) -> MtResult<()> {
    if locale.is_empty() {
        return Err(MtError::Request("Locale code is empty".to_string()));
    }

    if !locale
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(MtError::Request(format!(
            "Invalid characters in locale code: {}",
            locale
        )));
    }

    Ok(())
}

/// Convert a locale code to the upper-case form DeepL expects
///
/// - `en` → `EN`
/// - `pt-br` → `PT-BR`
/// - `en_GB` → `EN-GB`
pub fn deepl_language_code(locale: &str) -> String {
    locale.trim().replace('_', "-").to_uppercase()
}
