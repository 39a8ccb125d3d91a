//! connwatch: connectivity-health watchdog daemon.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────┐
//!                  │                  WATCHDOG                     │
//!                  │                                               │
//!   interval tick  │  ┌───────────┐     ┌───────────────────────┐ │
//!   ───────────────┼─▶│  monitor  │────▶│ probe (ping, per      │ │
//!                  │  │ scheduler │     │ target, bounded)      │ │
//!                  │  └─────┬─────┘     └───────────────────────┘ │
//!                  │        │ CycleResult                         │
//!                  │        ▼                                     │
//!                  │  ┌───────────┐  Verdict  ┌─────────────────┐ │
//!                  │  │  failure  │──────────▶│ status (health  │ │
//!                  │  │   state   │           │ file, every     │ │
//!                  │  │  machine  │           │ cycle)          │ │
//!                  │  └───────────┘           └─────────────────┘ │
//!                  │        │ threshold crossed + cooled down     │
//!                  │        ▼                                     │
//!                  │  ┌───────────────────────┐                   │
//!                  │  │ action (remediation   │                   │
//!                  │  │ process, synchronous) │                   │
//!                  │  └───────────────────────┘                   │
//!                  └──────────────────────────────────────────────┘
//! ```
//!
//! Configuration comes from an optional TOML file overlaid by environment
//! variables; fatal configuration errors exit with code 1 before the loop
//! starts.

use std::path::PathBuf;

use clap::Parser;

use connwatch::action::ProcessInvoker;
use connwatch::config::{self, ConfigError};
use connwatch::lifecycle::{signals, Shutdown};
use connwatch::observability::{logging, metrics};
use connwatch::probe::PingProber;
use connwatch::status::FileStatusPublisher;
use connwatch::Watchdog;

#[derive(Debug, Parser)]
#[command(name = "connwatch", about = "Connectivity-health watchdog daemon")]
struct Cli {
    /// Optional TOML config file; environment variables override it.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match config::load_config(cli.config.as_deref()) {
        Ok(config) => {
            logging::init(&config.observability.log_format);
            config
        }
        Err(e) => {
            // Config decides the log format; without one, fall back to JSON
            // so the error is still a structured line.
            logging::init("json");
            let message = match &e {
                ConfigError::Validation(_) => "Configuration is invalid",
                _ => "Configuration could not be loaded",
            };
            tracing::error!(event = "config_error", error = %e, "{}", message);
            std::process::exit(1);
        }
    };

    let snapshot = serde_json::to_value(&config).unwrap_or_default();
    tracing::info!(event = "startup", config = %snapshot, "connwatch starting");

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    let shutdown = Shutdown::new();
    tokio::spawn(signals::listen(shutdown.clone()));

    let watchdog = Watchdog::new(
        &config,
        Box::new(PingProber::new()),
        Box::new(ProcessInvoker::new(&config.action_path)),
        Box::new(FileStatusPublisher::new(&config.health_file)),
    );

    watchdog.run(shutdown.subscribe()).await;

    tracing::info!("Shutdown complete");
}
