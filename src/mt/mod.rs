/// Machine Translation Module
///
/// Provides the `MachineTranslator` abstraction used by the sync engine to
/// fill missing dictionary entries, with two implementations:
///
/// 1. **DeepL** - Real translations through the DeepL v2 HTTP API
/// 2. **Mock** - Deterministic, offline translations for tests
///
/// Providers translate one fragment per request and never retry; the first
/// failure is returned to the caller unchanged.
///
/// # Example
///
/// ```ignore
/// use i18n_sync::mt::{DeeplProvider, MachineTranslator};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let provider = DeeplProvider::new(
///         DeeplProvider::DEFAULT_ENDPOINT.to_string(),
///         std::env::var("DEEPL_API_KEY")?,
///     )?;
///     let steps = vec!["Open the app".to_string(), "Sign in".to_string()];
///     let translated = provider.translate_batch(&steps, "en", "de").await?;
///     println!("{:?}", translated);
///     Ok(())
/// }
/// ```
pub mod deepl;
pub mod error;
pub mod mock;
pub mod translator;

pub use deepl::DeeplProvider;
pub use error::{MtError, MtResult};
pub use mock::{MockMode, MockRequest, MockTranslator};
pub use translator::{MachineTranslator, deepl_language_code, validate_locale};
