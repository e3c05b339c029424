//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig (host, port)
//!     → listener.rs (resolve, bind, report)
//!     → tokio TcpListener handed to axum::serve
//! ```
//!
//! # Design Decisions
//! - Bind failure is the only fatal network error
//! - Per-connection transport errors stay inside hyper's connection task

pub mod listener;

pub use listener::{bind, ListenerError};
