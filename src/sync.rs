//! Fills keys missing from target languages with machine translations
//!
//! Languages and keys are walked in lexical order, one request at a time. The
//! dictionary is only modified once every language has been translated, so a
//! failing run leaves it exactly as it was.

use tracing::{debug, info, warn};

use crate::dictionary::{Dictionary, LanguageEntry, TranslationValue, Translations};
use crate::error::{Error, Result};
use crate::mt::{MachineTranslator, MtError};

/// What a sync run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Keys that received a new value
    pub translated_keys: usize,
    /// Calls issued to the translator
    pub requests: usize,
    /// Languages skipped because they have no DeepL language configured
    pub skipped_languages: Vec<String>,
}

/// Translate every reference key that is unset in a target language
///
/// Keys that already hold a value, including keys the reference no longer
/// defines, are left untouched.
pub async fn sync_dictionary(
    dictionary: &mut Dictionary,
    translator: &dyn MachineTranslator,
) -> Result<SyncReport> {
    let mut report = SyncReport::default();
    let mut updates: Vec<(String, Translations)> = Vec::new();

    for (lang, entry) in &dictionary.translations {
        let Some(target) = entry.deepl_code() else {
            warn!(lang = %lang, "missing DeepL language, skipping");
            report.skipped_languages.push(lang.clone());
            continue;
        };

        let stale = dictionary.stale_keys(lang);
        if !stale.is_empty() {
            debug!(lang = %lang, keys = ?stale, "keys not present in reference");
        }

        let filled =
            sync_language(&dictionary.reference, lang, entry, target, translator, &mut report)
                .await?;
        if !filled.is_empty() {
            updates.push((lang.clone(), filled));
        }
    }

    for (lang, filled) in updates {
        if let Some(entry) = dictionary.translations.get_mut(&lang) {
            entry.translations.extend(filled);
        }
    }

    info!(
        provider = translator.provider_name(),
        translated_keys = report.translated_keys,
        requests = report.requests,
        "sync finished"
    );
    Ok(report)
}

/// Collect translations for the keys `entry` is missing
async fn sync_language(
    reference: &LanguageEntry,
    lang: &str,
    entry: &LanguageEntry,
    target: &str,
    translator: &dyn MachineTranslator,
    report: &mut SyncReport,
) -> Result<Translations> {
    let source = reference.deepl_code().unwrap_or_default();
    let mut filled = Translations::new();

    for (key, reference_value) in &reference.translations {
        if let Some(existing) = entry.translations.get(key).filter(|v| !v.is_unset()) {
            if !existing.same_variant(reference_value) {
                warn!(
                    lang = %lang,
                    key = %key,
                    expected = reference_value.kind(),
                    found = existing.kind(),
                    "translation type differs from reference"
                );
            }
            continue;
        }

        info!(lang = %lang, key = %key, "fetching translation...");

        let translate_error = |source: MtError| Error::Translate {
            lang: lang.to_string(),
            key: key.clone(),
            source,
        };

        let value = match reference_value {
            TranslationValue::Text(text) => {
                report.requests += 1;
                let translated = translator
                    .translate(text, source, target)
                    .await
                    .map_err(translate_error)?;
                TranslationValue::Text(translated)
            }
            TranslationValue::List(items) => {
                report.requests += items.len();
                let translated = translator
                    .translate_batch(items, source, target)
                    .await
                    .map_err(translate_error)?;
                TranslationValue::List(translated)
            }
            TranslationValue::Unsupported(_) => {
                return Err(Error::UnsupportedValueType {
                    key: key.clone(),
                    found: reference_value.kind().to_string(),
                });
            }
        };

        filled.insert(key.clone(), value);
        report.translated_keys += 1;
    }

    Ok(filled)
}
