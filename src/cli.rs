//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{load_config, ConfigError, ServerConfig};

/// Static file server that adds permissive CORS headers, for local browser tooling.
#[derive(Parser, Debug)]
#[command(name = "cors-serve")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Optional TOML config file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Host to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind [default: 8000]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory to serve [default: current directory]
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Don't print the playground link at startup
    #[arg(long)]
    pub no_playground: bool,
}

impl Cli {
    /// Load the config file (if any) and apply flag overrides.
    ///
    /// The result is not validated yet.
    pub fn resolve(&self) -> Result<ServerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ServerConfig::default(),
        };
        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut ServerConfig) {
        if let Some(host) = &self.host {
            config.listener.host = host.clone();
        }
        if let Some(port) = self.port {
            config.listener.port = port;
        }
        if let Some(root) = &self.root {
            config.root = root.clone();
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
        if self.no_playground {
            config.playground.enabled = false;
        }
    }
}
