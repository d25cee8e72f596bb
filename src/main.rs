//! Bank dashboard client (v1)
//!
//! Boots the dashboard application and feeds it navigation commands read
//! from stdin, printing the mounted markup after each one.
//!
//! # Architecture Overview
//!
//! ```text
//!   config file ──▶ config ──▶ lifecycle::startup
//!                                   │
//!                 ┌─────────────────┼──────────────────┐
//!                 ▼                 ▼                  ▼
//!              backend           routing          app (Application)
//!            (opaque init)   (table + history)   (mount + render)
//!                                   │                  ▲
//!                                   └── ActiveRoute ───┘
//!
//!   stdin ──▶ lifecycle::events ──▶ Application::navigate ──▶ stdout
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::io::BufReader;

use bank_dashboard::app::Document;
use bank_dashboard::config::{load_config, validation::mount_id, AppConfig};
use bank_dashboard::lifecycle::{self, events, signals, Bootstrapped, OutputFormat, Shutdown};
use bank_dashboard::observability::init_logging;

#[derive(Parser)]
#[command(name = "bank-dashboard")]
#[command(about = "Client-side router and bootstrap for the bank dashboard", long_about = None)]
struct Cli {
    /// TOML configuration file (built-in defaults when omitted).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Location the application starts at.
    #[arg(short, long, default_value = "/")]
    url: String,

    /// Print the active route as JSON instead of markup.
    #[arg(long)]
    json: bool,

    /// Override the configured log level.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run(cli));

    // A pending stdin read blocks until its next line; don't wait for it.
    runtime.shutdown_background();
    result
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }

    init_logging(&config.observability)?;
    tracing::info!("bank-dashboard v0.1.0 starting");

    if config.backend.project_id.is_empty() {
        tracing::warn!("No backend project configured");
    }

    let mut document = Document::new();
    if let Some(id) = mount_id(&config.mount.selector) {
        document.add_element(id);
    }

    let Bootstrapped { backend, mut app } =
        lifecycle::bootstrap(&config, &cli.url, &mut document)?;
    tracing::info!(backend_apps = backend.len(), "Bootstrap complete");

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Html
    };
    let mut stdout = std::io::stdout();
    events::write_current(&app, &document, format, &mut stdout)?;

    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    signals::spawn_ctrl_c_listener(shutdown.clone());

    let stdin = BufReader::new(tokio::io::stdin());
    lifecycle::run_event_loop(&mut app, &mut document, stdin, &mut stdout, format, shutdown_rx)
        .await?;

    app.unmount(&mut document)?;
    tracing::info!(interrupted = shutdown.is_triggered(), "Shutdown complete");

    Ok(())
}
