//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind the listener (fatal on failure)
//! - Print the human-readable banner
//! - Serve until shutdown is triggered

use url::Url;

use crate::config::ServerConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::net::{self, ListenerError};

/// Anything that stops the server from starting or running.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Listener(#[from] ListenerError),
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bind, announce, and serve until `shutdown` is triggered.
pub async fn start(config: ServerConfig, shutdown: Shutdown) -> Result<(), StartupError> {
    let listener = net::bind(&config.listener).await?;
    let port = listener.local_addr()?.port();

    for line in banner(&config, port) {
        println!("{line}");
    }

    let server = HttpServer::new(config);
    server.run(listener, shutdown.wait()).await?;

    Ok(())
}

/// Lines printed once the server is listening on `port`.
///
/// `port` is the bound port, which differs from the configured one when
/// that is `0`.
pub fn banner(config: &ServerConfig, port: u16) -> Vec<String> {
    let base = config.listener.public_url(port);
    let mut lines = vec![
        format!("Starting CORS-enabled server on {base}"),
        format!("Serving files from {}", config.root.display()),
    ];

    if config.playground.enabled {
        match playground_url(config, port) {
            Some(url) => lines.push(format!("Test blueprint at: {url}")),
            None => tracing::warn!(
                base_url = %config.playground.base_url,
                "Playground URL is invalid, skipping link"
            ),
        }
    }

    lines.push("Press Ctrl+C to stop".to_string());
    lines
}

/// Playground URL carrying the served asset's address as a query parameter.
pub fn playground_url(config: &ServerConfig, port: u16) -> Option<Url> {
    let playground = &config.playground;
    let asset = format!("{}{}", config.listener.public_url(port), playground.asset_path);

    let mut url = Url::parse(&playground.base_url).ok()?;
    url.query_pairs_mut()
        .append_pair(&playground.query_param, &asset);
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_banner() {
        let lines = banner(&ServerConfig::default(), 8000);
        assert_eq!(
            lines,
            vec![
                "Starting CORS-enabled server on http://localhost:8000".to_string(),
                "Serving files from .".to_string(),
                "Test blueprint at: https://playground.wordpress.net/?blueprint-url=http%3A%2F%2Flocalhost%3A8000%2Fassets%2Fblueprints%2Fblueprint.json".to_string(),
                "Press Ctrl+C to stop".to_string(),
            ]
        );
    }

    #[test]
    fn playground_link_round_trips_asset_url() {
        let mut config = ServerConfig::default();
        config.playground.base_url = "https://example.test/play?theme=dark".into();
        config.playground.query_param = "src".into();
        config.playground.asset_path = "/data/site.json".into();

        let url = playground_url(&config, 9100).unwrap();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("theme".to_string(), "dark".to_string()),
                ("src".to_string(), "http://localhost:9100/data/site.json".to_string()),
            ]
        );
    }

    #[test]
    fn disabled_playground_is_omitted() {
        let mut config = ServerConfig::default();
        config.playground.enabled = false;
        let lines = banner(&config, 8000);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| !l.starts_with("Test blueprint")));
    }

    #[test]
    fn banner_uses_bound_port_and_brackets_ipv6() {
        let mut config = ServerConfig::default();
        config.listener.host = "::1".into();
        config.listener.port = 0;
        config.playground.enabled = false;

        let lines = banner(&config, 41234);
        assert_eq!(lines[0], "Starting CORS-enabled server on http://[::1]:41234");
    }

    #[tokio::test]
    async fn start_fails_when_port_taken() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mut config = ServerConfig::default();
        config.listener.host = "127.0.0.1".into();
        config.listener.port = taken.local_addr().unwrap().port();

        let err = start(config, Shutdown::new()).await.unwrap_err();
        assert!(matches!(err, StartupError::Listener(_)));
    }
}
