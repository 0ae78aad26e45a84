//! StickyPages — stick webpages to your desktop like post-it notes.
//!
//! Entry point: resolves the configuration and opens the sticky window.
//! With `--dry-run`, or when built without the `gui` feature, prints the
//! effective configuration instead.

use std::process::ExitCode;

use anyhow::{Context, Result};
use stickypages::app::App;
use stickypages::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli: Cli = argh::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app = App::new(&cli);
    app.startup();

    let result = if cli.dry_run {
        print_config(&app)
    } else {
        launch(app)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_config(app: &App) -> Result<()> {
    let json = serde_json::to_string_pretty(&app.config.to_json())
        .context("failed to serialize configuration")?;
    println!("{}", json);
    Ok(())
}

#[cfg(feature = "gui")]
fn launch(app: App) -> Result<()> {
    stickypages::ui::sticky_window::run(app)
}

#[cfg(not(feature = "gui"))]
fn launch(app: App) -> Result<()> {
    tracing::info!("built without the `gui` feature; printing the effective configuration");
    print_config(&app)
}
