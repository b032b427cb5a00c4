use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;

use snip::app::{App, AppEvent};
use snip::config::Config;
use snip::theme::ThemeVariant;
use snip::ui;

/// Get the config directory path (~/.config/snip/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("snip"))
}

#[derive(Parser, Debug)]
#[command(
    name = "snip",
    about = "Terminal client for the goldsborough.me URL shortener"
)]
struct Args {
    /// Shorten endpoint base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Per-request timeout in seconds (overrides the config file)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Theme to start with, "dark" or "light" (overrides the config file)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config_path = get_config_dir()?.join("config.toml");
    let mut config = Config::load(&config_path).context("Failed to load configuration")?;

    // CLI flags win over the config file
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(theme) = args.theme {
        config.theme = theme;
    }

    // Fail fast on a bad endpoint rather than on the first submit
    url::Url::parse(&config.endpoint)
        .with_context(|| format!("Invalid shorten endpoint URL: {}", config.endpoint))?;
    if config.timeout_secs == 0 {
        anyhow::bail!("Timeout must be at least 1 second");
    }

    let theme = ThemeVariant::from_str_name(&config.theme).unwrap_or_else(|| {
        tracing::warn!(theme = %config.theme, "Unknown theme name, falling back to dark");
        ThemeVariant::Dark
    });

    let mut app = App::new(
        config.endpoint.clone(),
        Duration::from_secs(config.timeout_secs),
        theme,
    )
    .context("Failed to create application")?;

    // Event channel for the background shorten request
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    // Run the TUI
    ui::run(&mut app, event_tx, event_rx).await?;

    Ok(())
}
