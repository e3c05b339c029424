//! TCP listener setup.
//!
//! # Responsibilities
//! - Resolve the configured host to exactly one address
//! - Bind it, turning failures into a typed, human-readable error
//!
//! Only one resolved address is ever tried. Falling through to another
//! address of the same host would let a second instance start next to the
//! first (e.g. `[::1]` taken, `127.0.0.1` free).

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    /// Host lookup failed.
    #[error("Failed to resolve {address}: {source}")]
    Resolve {
        address: String,
        #[source]
        source: std::io::Error,
    },
    /// Host resolved to nothing.
    #[error("Failed to resolve {address}: no addresses found")]
    NoAddress { address: String },
    /// Failed to bind to address (in use, no privilege).
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Resolve and bind the configured address.
///
/// IPv4 results are preferred, so `localhost` binds `127.0.0.1` on
/// dual-stack hosts.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ListenerError> {
    let address = resolve(config).await?;

    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| ListenerError::Bind { address, source })?;

    if let Ok(local_addr) = listener.local_addr() {
        tracing::info!(
            address = %local_addr,
            "Listener bound"
        );
    }

    Ok(listener)
}

/// The single address `config` binds to.
pub async fn resolve(config: &ListenerConfig) -> Result<SocketAddr, ListenerError> {
    let host = config.host.trim_start_matches('[').trim_end_matches(']');
    let display = config.authority(config.port);

    let resolved = tokio::net::lookup_host((host, config.port))
        .await
        .map_err(|source| ListenerError::Resolve {
            address: display.clone(),
            source,
        })?;

    preferred(resolved).ok_or(ListenerError::NoAddress { address: display })
}

/// First IPv4 address, else the first address at all.
fn preferred(addrs: impl IntoIterator<Item = SocketAddr>) -> Option<SocketAddr> {
    let mut first = None;
    for addr in addrs {
        if addr.is_ipv4() {
            return Some(addr);
        }
        first.get_or_insert(addr);
    }
    first
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listener_on(host: &str, port: u16) -> ListenerConfig {
        ListenerConfig {
            host: host.into(),
            port,
        }
    }

    #[test]
    fn prefers_ipv4() {
        let v6: SocketAddr = "[::1]:8000".parse().unwrap();
        let v4: SocketAddr = "127.0.0.1:8000".parse().unwrap();

        assert_eq!(preferred([v6, v4]), Some(v4));
        assert_eq!(preferred([v6]), Some(v6));
        assert_eq!(preferred([]), None);
    }

    #[tokio::test]
    async fn binds_ephemeral_port() {
        let listener = bind(&listener_on("127.0.0.1", 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_ne!(addr.port(), 0);
    }

    #[tokio::test]
    async fn second_bind_on_same_port_fails() {
        let first = bind(&listener_on("127.0.0.1", 0)).await.unwrap();
        let port = first.local_addr().unwrap().port();

        let err = bind(&listener_on("127.0.0.1", port)).await.unwrap_err();
        let ListenerError::Bind { address, source } = &err else {
            panic!("expected bind error, got {err}");
        };
        assert_eq!(address.port(), port);
        assert_eq!(source.kind(), std::io::ErrorKind::AddrInUse);
        assert!(err.to_string().starts_with("Failed to bind 127.0.0.1:"));

        // The first listener is untouched.
        assert_eq!(first.local_addr().unwrap().port(), port);
    }

    #[tokio::test]
    async fn default_host_binds_one_address_only() {
        let default_host = ListenerConfig::default().host;

        let first = bind(&listener_on(&default_host, 0)).await.unwrap();
        let port = first.local_addr().unwrap().port();
        assert!(first.local_addr().unwrap().ip().is_loopback());

        let err = bind(&listener_on(&default_host, port)).await.unwrap_err();
        assert!(matches!(err, ListenerError::Bind { .. }), "{err}");
    }

    #[tokio::test]
    async fn bracketed_ipv6_literal_resolves() {
        let addr = resolve(&listener_on("[::1]", 8000)).await.unwrap();
        assert_eq!(addr, "[::1]:8000".parse::<SocketAddr>().unwrap());
    }
}
