use std::path::PathBuf;

use thiserror::Error;

use crate::mt::MtError;

/// Failure to read, write or encode one of the files the pipeline touches
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// Parsed fine but violates the dictionary structure
    #[error("{0}")]
    Invalid(String),
}

/// Errors that abort a sync run
#[derive(Debug, Error)]
pub enum Error {
    /// The dictionary file could not be opened or parsed
    #[error("loading translation file '{}'", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },
    /// The merged dictionary could not be written back
    #[error("saving translation file '{}'", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },
    /// The generated JS module could not be produced or written
    #[error("rendering output file '{}'", .path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },
    /// The translation provider could not be constructed
    #[error("setting up translation provider")]
    Provider(#[source] MtError),
    /// The translation provider failed for one key of one language
    #[error("translating {lang}:{key}")]
    Translate {
        lang: String,
        key: String,
        #[source]
        source: MtError,
    },
    /// The reference holds a value that is neither text nor a list of text
    #[error("unexpected translation type for key '{key}': {found}")]
    UnsupportedValueType { key: String, found: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Render an error together with its chain of sources on one line
pub fn display_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
