//! Static file server with permissive CORS headers.
//!
//! Serves a directory over HTTP/1.1 and stamps every response, including
//! errors and preflight answers, with the same `Access-Control-*` and
//! `Cache-Control` headers so browser tooling on another origin can fetch
//! local files.

pub mod cli;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::ServerConfig;
pub use http::{HttpServer, ResponseHeaders};
pub use lifecycle::Shutdown;
