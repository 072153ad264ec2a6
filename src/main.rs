//! Material comparison service (v1)
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser                ┌──────────────────────────────────────────────┐
//!     ───────── GET / ──────▶│  http::server ──▶ handlers ──▶ views (HTML)  │
//!     ── POST /compare ─────▶│                     │                        │
//!                            │                     ▼                        │
//!                            │   catalog::MaterialStore   compare::Comparator│
//!                            │        ▲                                     │
//!                            │        │ loaded once at startup              │
//!                            │   materials.json                             │
//!                            │                                              │
//!                            │  config · observability · lifecycle          │
//!                            └──────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use material_compare::config;
use material_compare::lifecycle::{self, signals, Shutdown};
use material_compare::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "material-compare")]
#[command(about = "Compare material properties in the browser", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the materials JSON file (overrides the config).
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Bind address, e.g. 0.0.0.0:5000 (overrides the config).
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = config::load_with_overrides(cli.config.as_deref(), cli.data, cli.bind)?;

    logging::init_logging(&config.observability);
    tracing::info!("material-compare v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        materials_path = %config.data.materials_path.display(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    // Store must load before the listener binds
    let server = lifecycle::bootstrap(config.clone())?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    signals::spawn_signal_handler(shutdown);

    server.run(listener, shutdown_rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
