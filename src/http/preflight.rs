//! CORS preflight handling.
//!
//! Browsers send `OPTIONS` before cross-origin requests that carry custom
//! headers. Any `OPTIONS` request, for any path, is answered with a bare
//! `200 OK` before it reaches the file service. The request body is never
//! read.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Middleware that short-circuits `OPTIONS` and passes everything else on.
pub async fn preflight(request: Request<Body>, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        tracing::debug!(path = %request.uri().path(), "Answering preflight");
        return StatusCode::OK.into_response();
    }

    next.run(request).await
}
