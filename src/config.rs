//! Command line / environment configuration
//!
//! Every flag can also be given through the environment variable shown in
//! `--help`, so CI jobs can keep the API key out of the command line.

use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::mt::DeeplProvider;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "i18n-sync",
    version,
    about = "Fill missing translations via DeepL and render the embedded JS module"
)]
pub struct Cli {
    /// DeepL API endpoint to request translations from
    #[arg(long, env = "DEEPL_API_ENDPOINT", default_value = DeeplProvider::DEFAULT_ENDPOINT)]
    pub deepl_api_endpoint: String,

    /// API key for the DeepL API; translation is skipped without one
    #[arg(long, env = "DEEPL_API_KEY", hide_env_values = true)]
    pub deepl_api_key: Option<String>,

    /// Where to put rendered translations
    #[arg(short, long, env = "OUTPUT_FILE", default_value = "src/langs/langs.js")]
    pub output_file: PathBuf,

    /// File to use for translations
    #[arg(short, long, env = "TRANSLATION_FILE", default_value = "i18n.yaml")]
    pub translation_file: PathBuf,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, env = "LOG_LEVEL", default_value = "info", value_parser = parse_log_level)]
    pub log_level: LevelFilter,
}

/// Parse a level name, also accepting the `warning`, `fatal` and `panic`
/// spellings the original tool understood
pub fn parse_log_level(raw: &str) -> Result<LevelFilter, String> {
    let name = raw.trim().to_ascii_lowercase();
    match name.as_str() {
        "warning" => Ok(LevelFilter::WARN),
        "fatal" | "panic" => Ok(LevelFilter::ERROR),
        // LevelFilter also parses "1".."5", which is not a level name here
        _ if name.chars().all(|c| c.is_ascii_digit()) => {
            Err(format!("unknown log level '{}'", raw))
        }
        _ => name
            .parse::<LevelFilter>()
            .map_err(|_| format!("unknown log level '{}'", raw)),
    }
}

/// Settings for one run, fixed before the pipeline starts
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_endpoint: String,
    pub api_key: Option<String>,
    pub translation_file: PathBuf,
    pub output_file: PathBuf,
}

impl Config {
    pub fn new(translation_file: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            api_endpoint: DeeplProvider::DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            translation_file: translation_file.into(),
            output_file: output_file.into(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into()).filter(|key: &String| !key.trim().is_empty());
        self
    }

    pub fn with_api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = endpoint.into();
        self
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let config = Config::new(cli.translation_file, cli.output_file)
            .with_api_endpoint(cli.deepl_api_endpoint);
        match cli.deepl_api_key {
            Some(key) => config.with_api_key(key),
            None => config,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_endpoint", &self.api_endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("translation_file", &self.translation_file)
            .field("output_file", &self.output_file)
            .finish()
    }
}
