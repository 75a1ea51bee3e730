//! Wingman CLI Entry Point
//!
//! - `wingman login` / `register` / `forgot-password` / `logout` - account flows
//! - `wingman status` - show the saved session
//! - `wingman analyze` - run analyses, optionally followed by a chat

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wingman::cli::{commands, output::Output, Cli};
use wingman::session::{FileStorage, SessionStore};
use wingman::utils::config::WingmanConfig;
use wingman::{HttpApiClient, WingmanApp};

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    if let Err(e) = run(cli, &output).await {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: &Output) -> anyhow::Result<()> {
    let config = WingmanConfig::load(&cli.config)?.with_overrides(cli.api_url, cli.data_dir)?;
    tracing::debug!(?config, "Configuration loaded");

    let store = Arc::new(SessionStore::restore(FileStorage::new(config.storage.data_dir.clone())));
    let api = HttpApiClient::new(config.api.base_url.clone(), config.api.timeout())?;
    let app = WingmanApp::new(api, store);

    commands::execute(&app, output, cli.command).await
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "wingman=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
