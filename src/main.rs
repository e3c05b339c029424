//! cors-serve
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ net::listener ──▶ http::server
//!                                           │
//!                                           ▼
//!                                   TraceLayer (tower-http)
//!                                           │
//!                                           ▼
//!                              http::headers (4 header layers)
//!                                           │
//!                                           ▼
//!                        http::preflight ── OPTIONS ──▶ 200, empty
//!                                           │
//!                                           ▼
//!                              http::static_files (ServeDir)
//! ```

use std::process::ExitCode;

use clap::Parser;

use cors_serve::cli::Cli;
use cors_serve::config::{validate_config, ConfigError};
use cors_serve::lifecycle::{self, signals, Shutdown};
use cors_serve::observability::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(errors) = validate_config(&config) {
        eprintln!("error: {}", ConfigError::Validation(errors));
        return ExitCode::FAILURE;
    }

    logging::init(&config.observability.log_level);

    tracing::info!(
        host = %config.listener.host,
        port = config.listener.port,
        root = %config.root.display(),
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    signals::forward_to(&shutdown);

    if let Err(e) = lifecycle::start(config, shutdown).await {
        tracing::error!(error = %e, "Server failed");
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
