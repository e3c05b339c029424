//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router: file service as fallback, preflight middleware
//! - Wrap everything in the fixed response-header layers
//! - Wire up request tracing
//! - Serve connections until the shutdown future resolves

use std::future::Future;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::http::headers::ResponseHeaders;
use crate::http::preflight::preflight;
use crate::http::static_files::serve_root;

/// Static file server with CORS headers.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let router = Self::build_router(&config, &ResponseHeaders::cors());
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The header layers sit outside the preflight middleware, so preflight
    /// answers get the same headers as file and error responses.
    fn build_router(config: &ServerConfig, headers: &ResponseHeaders) -> Router {
        let router = Router::new()
            .fallback_service(serve_root(&config.root))
            .layer(middleware::from_fn(preflight));

        headers
            .apply(router)
            .layer(TraceLayer::new_for_http())
    }

    /// Clone of the router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` completes.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            root = %self.config.root.display(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
