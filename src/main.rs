use std::process::ExitCode;

use clap::Parser;
use i18n_sync::error::display_chain;
use i18n_sync::{Cli, Config, pipeline};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::new(cli.log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from(cli);

    match pipeline::run(&config).await {
        Ok(Some(report)) => {
            info!(
                translated_keys = report.translated_keys,
                skipped_languages = ?report.skipped_languages,
                "translations up to date"
            );
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %display_chain(&err), "translation run failed");
            ExitCode::FAILURE
        }
    }
}
