//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, serve loop)
//!     → headers.rs (fixed CORS/cache headers set on the way out)
//!     → preflight.rs (OPTIONS answered here, 200 + empty body)
//!     → static_files.rs (GET/HEAD resolved under the served root)
//!     → listing.rs (directories without index.html, missing paths)
//!     → Send to client
//! ```

pub mod headers;
pub mod listing;
pub mod preflight;
pub mod server;
pub mod static_files;

pub use headers::ResponseHeaders;
pub use server::HttpServer;
