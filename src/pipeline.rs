//! `Load → Sync → Persist → Render`
//!
//! Stages run strictly in order and the first failure ends the run. Nothing
//! is written before sync has completed for every language.

use tracing::{info, warn};

use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::error::{Error, Result};
use crate::mt::{DeeplProvider, MachineTranslator};
use crate::render::write_module;
use crate::sync::{SyncReport, sync_dictionary};

/// Run the whole pipeline against DeepL, or without translation when no API
/// key is configured
pub async fn run(config: &Config) -> Result<Option<SyncReport>> {
    let provider = match &config.api_key {
        Some(key) => Some(
            DeeplProvider::new(config.api_endpoint.clone(), key.clone())
                .map_err(Error::Provider)?,
        ),
        None => None,
    };

    run_with(
        config,
        provider.as_ref().map(|p| p as &dyn MachineTranslator),
    )
    .await
}

/// Run the pipeline with an explicit translator; `None` skips the sync stage
pub async fn run_with(
    config: &Config,
    translator: Option<&dyn MachineTranslator>,
) -> Result<Option<SyncReport>> {
    info!("loading translations...");
    let mut dictionary = Dictionary::load(&config.translation_file)?;

    info!("auto-translating new strings...");
    let report = match translator {
        Some(translator) => Some(sync_dictionary(&mut dictionary, translator).await?),
        None => {
            warn!("missing DeepL API key, skipping translation of new strings");
            None
        }
    };

    info!("saving translation file...");
    dictionary.save(&config.translation_file)?;

    info!("updating JS embedded translations...");
    write_module(&dictionary, &config.output_file)?;

    Ok(report)
}
