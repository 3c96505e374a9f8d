use std::process::ExitCode;
use std::sync::Arc;

use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use moveboard::config::HostConfig;
use moveboard::error::HostError;
use moveboard::photos::PhotoClient;
use moveboard::session::Session;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // A missing .env file is fine.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }

    // Logs go to stderr; stdout carries the scene stream.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "moveboard exited");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let photos = PhotoClient::new(config.photos_url.clone(), config.timeouts)?;

    tracing::info!(photos_url = %config.photos_url, container = ?config.container, "moveboard session started");

    let session = Session::new(Arc::new(photos), config.container);
    session
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
}
