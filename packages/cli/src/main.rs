use std::path::PathBuf;

use api::{ClientConfig, HttpClient};
use clap::Parser;
use session::{FileStorage, Session};
use tracing_subscriber::EnvFilter;

mod commands;

/// Command-line client for the SafePath backend.
#[derive(Debug, Parser)]
#[command(name = "safepath", version, about)]
struct Cli {
    /// Path to a safepath.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Backend base URL, overriding config and SAFEPATH_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Directory holding the stored session
    #[arg(long, global = true)]
    session_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: commands::Command,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Platform data directory for the session, e.g. `~/.local/share/safepath/`.
fn default_session_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("safepath")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(ClientConfig::filename()));
    let mut config = ClientConfig::load(Some(config_path.as_path()))?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    let session_dir = cli
        .session_dir
        .or_else(|| config.session.dir.clone())
        .unwrap_or_else(default_session_dir);
    tracing::debug!("Using session dir {}", session_dir.display());

    let session = Session::new(FileStorage::new(session_dir));
    let client = HttpClient::from_config(&config, session)?;

    let output = commands::run(cli.command, &client).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
