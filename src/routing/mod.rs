//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Rule Compilation (at load / reload):
//!     document bytes
//!     → compiler.rs (decode YAML, build rules)
//!     → config::validation (service URLs, path regexes, catch-all rules)
//!     → Freeze as immutable RoutingTable
//!     → shared.rs (atomic swap for readers)
//!
//! Incoming Request (host, path)
//!     → router.rs (ordered scan)
//!     → rule.rs / matcher.rs (evaluate hostname AND path)
//!     → Return: matched Rule or NoMatch
//! ```
//!
//! # Design Decisions
//! - Rules compiled once, immutable at runtime
//! - Deterministic: same input always matches same rule
//! - First match wins, in document order
//! - Exactly one catch-all, last, so every request has a target

pub mod compiler;
pub mod matcher;
pub mod router;
pub mod rule;
pub mod shared;

pub use compiler::{compile, IngressError};
pub use router::RoutingTable;
pub use rule::{Rule, RuleSummary};
pub use shared::SharedRoutingTable;
