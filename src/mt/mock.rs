//! Mock Machine Translator for testing
//!
//! This module provides a deterministic, API-free translator for exercising
//! the sync pipeline without an API key or network access. Every call is
//! recorded so tests can assert on how many requests were issued and in
//! which order.
//!
//! # Example
//!
//! ```ignore
//! use i18n_sync::mt::{MachineTranslator, MockTranslator, MockMode};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslator::new(MockMode::Suffix);
//!     let result = mock.translate("hello", "en", "fr").await.unwrap();
//!     assert_eq!(result, "hello_fr");
//!     assert_eq!(mock.call_count(), 1);
//! }
//! ```

use crate::mt::error::{MtError, MtResult};
use crate::mt::translator::MachineTranslator;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append locale suffix: "hello" → "hello_fr"
    Suffix,

    /// Use predefined mappings for realistic translations,
    /// (text, target_locale) → translation, falling back to `Suffix`
    Mappings(HashMap<(String, String), String>),

    /// Fail every request with a `Request` error carrying this message
    Error(String),

    /// Fail only requests whose text equals this value, suffix the rest
    FailOn(String),

    /// No-op: return input unchanged
    NoOp,
}

/// A single recorded translation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockRequest {
    pub text: String,
    pub source_locale: String,
    pub target_locale: String,
}

/// Mock translator that simulates various translation scenarios
///
/// Clones share the same request log.
#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
    requests: Arc<Mutex<Vec<MockRequest>>>,
}

impl MockTranslator {
    /// Create a new MockTranslator with the given mode
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of `translate` calls received so far
    pub fn call_count(&self) -> usize {
        self.lock_requests().len()
    }

    /// Snapshot of all recorded requests, oldest first
    pub fn requests(&self) -> Vec<MockRequest> {
        self.lock_requests().clone()
    }

    fn lock_requests(&self) -> std::sync::MutexGuard<'_, Vec<MockRequest>> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Apply translation logic based on the mode
    fn apply_translation(&self, text: &str, target: &str) -> MtResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), target.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target)))
            }
            MockMode::Error(msg) => Err(MtError::Request(msg.clone())),
            MockMode::FailOn(bad) if bad == text => Err(MtError::Request(format!(
                "mock failure for text '{}'",
                text
            ))),
            MockMode::FailOn(_) => Ok(format!("{}_{}", text, target)),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String> {
        self.lock_requests().push(MockRequest {
            text: text.to_string(),
            source_locale: source_locale.to_string(),
            target_locale: target_locale.to_string(),
        });

        self.apply_translation(text, target_locale)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_suffix_single_translation() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let result = mock.translate("hello", "en", "fr").await.unwrap();
        assert_eq!(result, "hello_fr");
    }

    #[tokio::test]
    async fn test_mappings_with_fallback() {
        let mut map = HashMap::new();
        map.insert(
            ("hello".to_string(), "de".to_string()),
            "hallo".to_string(),
        );
        let mock = MockTranslator::new(MockMode::Mappings(map));

        assert_eq!(mock.translate("hello", "en", "de").await.unwrap(), "hallo");
        assert_eq!(
            mock.translate("goodbye", "en", "de").await.unwrap(),
            "goodbye_de"
        );
    }

    #[tokio::test]
    async fn test_error_mode() {
        let mock = MockTranslator::new(MockMode::Error("boom".to_string()));
        let result = mock.translate("hello", "en", "fr").await;
        assert_eq!(result, Err(MtError::Request("boom".to_string())));
    }

    #[tokio::test]
    async fn test_fail_on_only_matching_text() {
        let mock = MockTranslator::new(MockMode::FailOn("bad".to_string()));
        assert!(mock.translate("good", "en", "fr").await.is_ok());
        assert!(mock.translate("bad", "en", "fr").await.is_err());
    }

    #[tokio::test]
    async fn test_noop_returns_input() {
        let mock = MockTranslator::new(MockMode::NoOp);
        assert_eq!(mock.translate("same", "en", "fr").await.unwrap(), "same");
    }

    #[tokio::test]
    async fn test_requests_are_recorded_in_order() {
        let mock = MockTranslator::new(MockMode::Suffix);
        mock.translate("a", "en", "de").await.unwrap();
        mock.translate("b", "en", "fr").await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].text, "a");
        assert_eq!(requests[0].target_locale, "de");
        assert_eq!(requests[1].text, "b");
        assert_eq!(requests[1].source_locale, "en");
    }

    #[tokio::test]
    async fn test_clones_share_request_log() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let clone = mock.clone();
        clone.translate("hello", "en", "de").await.unwrap();
        assert_eq!(mock.call_count(), 1);
    }

    #[test]
    fn test_provider_name() {
        let mock = MockTranslator::new(MockMode::Suffix);
        assert_eq!(mock.provider_name(), "Mock Translator");
    }
}
