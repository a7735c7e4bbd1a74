//! Translation dictionary model and its YAML store
//!
//! The dictionary file holds one reference entry, which defines every key and
//! the shape of its value, plus one entry per target language:
//!
//! ```yaml
//! reference:
//!   deeplLanguage: en
//!   languageKey: en
//!   translations:
//!     hello: Hello
//!     steps:
//!       - First
//!       - Second
//! translations:
//!   de:
//!     deeplLanguage: de
//!     languageKey: de
//!     translations:
//!       hello: Hallo
//! ```
//!
//! All maps are `BTreeMap`s, so saving and rendering are ordered by key.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::atomic::write_atomically;
use crate::error::{DocumentError, Error, Result};

/// Value stored for one key of a language
///
/// Only `Text` and `List` can be machine translated. Anything else found in
/// the file is kept as `Unsupported` so it survives a load/save cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationValue {
    Text(String),
    List(Vec<String>),
    Unsupported(serde_yaml::Value),
}

impl TranslationValue {
    /// `null` values are treated like missing keys
    pub fn is_unset(&self) -> bool {
        matches!(self, TranslationValue::Unsupported(serde_yaml::Value::Null))
    }

    /// Whether both values use the same variant (text vs. list)
    pub fn same_variant(&self, other: &TranslationValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Short human readable name of the value's shape
    pub fn kind(&self) -> &'static str {
        use serde_yaml::Value;

        match self {
            TranslationValue::Text(_) => "text",
            TranslationValue::List(_) => "list",
            TranslationValue::Unsupported(value) => match value {
                Value::Null => "null",
                Value::Bool(_) => "bool",
                Value::Number(_) => "number",
                Value::String(_) => "text",
                Value::Sequence(_) => "list with non-text items",
                Value::Mapping(_) => "mapping",
                Value::Tagged(_) => "tagged value",
            },
        }
    }
}

impl From<&str> for TranslationValue {
    fn from(text: &str) -> Self {
        TranslationValue::Text(text.to_string())
    }
}

impl From<Vec<&str>> for TranslationValue {
    fn from(items: Vec<&str>) -> Self {
        TranslationValue::List(items.into_iter().map(str::to_string).collect())
    }
}

/// Key → value mapping of one language
pub type Translations = BTreeMap<String, TranslationValue>;

/// One language of the dictionary, reference or target
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageEntry {
    /// Language code understood by DeepL; targets without one are not synced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deepl_language: Option<String>,
    /// Key the language is exported under in the generated module
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_key: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub translations: Translations,
}

impl LanguageEntry {
    pub fn new(language_key: &str, deepl_language: Option<&str>) -> Self {
        Self {
            deepl_language: deepl_language.map(str::to_string),
            language_key: Some(language_key.to_string()),
            translations: Translations::new(),
        }
    }

    /// Builder-style insert, mostly for tests and fixtures
    pub fn with_value(mut self, key: &str, value: impl Into<TranslationValue>) -> Self {
        self.translations.insert(key.to_string(), value.into());
        self
    }

    /// The DeepL language code, ignoring blank values
    pub fn deepl_code(&self) -> Option<&str> {
        non_blank(self.deepl_language.as_deref())
    }

    /// Whether `key` holds a non-null value
    pub fn is_set(&self, key: &str) -> bool {
        self.translations
            .get(key)
            .is_some_and(|value| !value.is_unset())
    }
}

/// The whole translation file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dictionary {
    pub reference: LanguageEntry,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub translations: BTreeMap<String, LanguageEntry>,
}

impl Dictionary {
    /// Read and parse the dictionary at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let load_error = |source: DocumentError| Error::Load {
            path: path.to_path_buf(),
            source,
        };

        let content = fs::read_to_string(path).map_err(|e| load_error(e.into()))?;
        let dictionary = Self::from_yaml_str(&content).map_err(load_error)?;

        debug!(
            path = %path.display(),
            reference_keys = dictionary.reference.translations.len(),
            languages = dictionary.translations.len(),
            "loaded translation file"
        );
        Ok(dictionary)
    }

    /// Serialize to `path`, replacing the file only once the write succeeded
    pub fn save(&self, path: &Path) -> Result<()> {
        write_atomically(path, |writer: &mut dyn Write| -> std::result::Result<(), DocumentError> {
            writer.write_all(self.to_yaml_string()?.as_bytes())?;
            Ok(())
        })
        .map_err(|source| Error::Persist {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml_str(content: &str) -> std::result::Result<Self, DocumentError> {
        let dictionary: Dictionary = serde_yaml::from_str(content)?;
        if dictionary.reference_key().is_none() {
            return Err(DocumentError::Invalid(
                "reference entry has no languageKey".to_string(),
            ));
        }
        Ok(dictionary)
    }

    pub fn to_yaml_string(&self) -> std::result::Result<String, DocumentError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Language key of the reference entry
    pub fn reference_key(&self) -> Option<&str> {
        non_blank(self.reference.language_key.as_deref())
    }

    /// Languages as exported by the generated module: every target entry plus
    /// the reference under its own language key
    pub fn render_view(&self) -> BTreeMap<&str, &Translations> {
        let mut view: BTreeMap<&str, &Translations> = self
            .translations
            .iter()
            .map(|(lang, entry)| (lang.as_str(), &entry.translations))
            .collect();
        view.insert(
            self.reference_key().unwrap_or_default(),
            &self.reference.translations,
        );
        view
    }

    /// Keys present in `lang` that the reference no longer defines
    pub fn stale_keys(&self, lang: &str) -> Vec<&str> {
        self.translations
            .get(lang)
            .map(|entry| {
                entry
                    .translations
                    .keys()
                    .filter(|key| !self.reference.translations.contains_key(*key))
                    .map(String::as_str)
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
