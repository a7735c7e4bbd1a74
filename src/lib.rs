//! Keep a multi-language translation dictionary in sync with its reference
//! language.
//!
//! Keys present in the reference but unset in a target language are filled
//! through a [`mt::MachineTranslator`] (DeepL in production), the merged
//! dictionary is written back, and a JS module embedding every language is
//! generated for the front-end.
//!
//! ```ignore
//! use i18n_sync::{Config, pipeline};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::new("i18n.yaml", "src/langs/langs.js")
//!         .with_api_key(std::env::var("DEEPL_API_KEY")?);
//!     pipeline::run(&config).await?;
//!     Ok(())
//! }
//! ```

pub mod atomic;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod mt;
pub mod pipeline;
pub mod render;
pub mod sync;


pub use config::{Cli, Config};
pub use dictionary::{Dictionary, LanguageEntry, TranslationValue, Translations};
pub use error::{DocumentError, Error, Result};
pub use sync::{SyncReport, sync_dictionary};
