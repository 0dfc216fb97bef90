//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → stderr via tracing-subscriber fmt layer
//! ```
//!
//! # Design Decisions
//! - Structured fields (`rules`, `path`, `error`) rather than formatted text
//! - The library never installs a subscriber; binaries call `init_logging`

pub mod logging;

pub use logging::init_logging;
