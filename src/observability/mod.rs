//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!     → tower_http TraceLayer spans per request (DEBUG)
//!
//! Consumer:
//!     → logging.rs subscriber (fmt to stderr, EnvFilter)
//! ```
//!
//! # Design Decisions
//! - RUST_LOG wins over the configured level when set
//! - Per-request events stay at DEBUG, silent by default

pub mod logging;
