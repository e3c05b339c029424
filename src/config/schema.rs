//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every section is `#[serde(default)]`, so partial files are filled in
//! from the defaults below.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the server.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind host and port).
    pub listener: ListenerConfig,

    /// Directory that files are served from.
    pub root: PathBuf,

    /// Playground convenience link printed at startup.
    pub playground: PlaygroundConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            root: PathBuf::from("."),
            playground: PlaygroundConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Host to bind. Loopback by default.
    pub host: String,

    /// TCP port to bind.
    pub port: u16,
}

impl ListenerConfig {
    /// `host:port` for `port`, with IPv6 literals bracketed.
    pub fn authority(&self, port: u16) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{port}", self.host)
        } else {
            format!("{}:{port}", self.host)
        }
    }

    /// Base URL clients use to reach the server once it is bound to `port`.
    pub fn public_url(&self, port: u16) -> String {
        format!("http://{}", self.authority(port))
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8000,
        }
    }
}

/// Where the startup banner points people to try the served assets.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Print the playground link at startup.
    pub enabled: bool,

    /// Playground tool URL.
    pub base_url: String,

    /// Query parameter the playground reads the asset URL from.
    pub query_param: String,

    /// Path of the asset under the served root (must start with `/`).
    pub asset_path: String,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://playground.wordpress.net/".to_string(),
            query_param: "blueprint-url".to_string(),
            asset_path: "/assets/blueprints/blueprint.json".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
