//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validated config → Bind listener → Print banner → Serve
//!
//! Shutdown (shutdown.rs):
//!     trigger() → every waiter resolves → axum stops accepting, drains
//!
//! Signals (signals.rs):
//!     SIGINT (Ctrl+C) / SIGTERM → Shutdown::trigger
//! ```
//!
//! # Design Decisions
//! - Fail fast: a bind error is fatal and surfaces as a non-zero exit
//! - Listener binds before the banner, so the banner never lies

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{banner, start, StartupError};
