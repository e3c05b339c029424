//! Response header injection.
//!
//! Every response leaving the server, whatever produced it (file, preflight,
//! 404, 405), carries the same fixed header set. Each header is installed as
//! an overriding [`SetResponseHeaderLayer`], so a value set further in is
//! replaced and the header appears exactly once.

use axum::{
    http::{header, HeaderName, HeaderValue},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

/// The fixed set of headers applied to every response.
#[derive(Debug, Clone)]
pub struct ResponseHeaders {
    headers: Vec<(HeaderName, HeaderValue)>,
}

impl ResponseHeaders {
    /// Permissive cross-origin headers with caching disabled.
    pub fn cors() -> Self {
        Self {
            headers: vec![
                (
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static("*"),
                ),
                (
                    header::ACCESS_CONTROL_ALLOW_METHODS,
                    HeaderValue::from_static("GET, OPTIONS"),
                ),
                (
                    header::ACCESS_CONTROL_ALLOW_HEADERS,
                    HeaderValue::from_static("*"),
                ),
                (
                    header::CACHE_CONTROL,
                    HeaderValue::from_static("no-store, no-cache, must-revalidate"),
                ),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HeaderName, &HeaderValue)> {
        self.headers.iter().map(|(name, value)| (name, value))
    }

    /// Wrap `router` (routes and fallback alike) so every response gets the
    /// full header set.
    pub fn apply<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        self.iter().fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::overriding(
                name.clone(),
                value.clone(),
            ))
        })
    }
}

impl Default for ResponseHeaders {
    fn default() -> Self {
        Self::cors()
    }
}
