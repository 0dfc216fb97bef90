//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGINT (Ctrl+C) → shutdown future resolves
//!     → rules update loop exits → watcher dropped
//! ```
//!
//! # Design Decisions
//! - Shutdown is a plain future handed to the loop that owns the watcher
//! - Only one long-running task exists, so no broadcast fan-out

pub mod signals;

pub use signals::shutdown_signal;
