//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! rules file (YAML/JSON)
//!     → loader.rs (read bytes)
//!     → routing::compile (decode into schema.rs types)
//!     → validation.rs (semantic checks)
//!     → RoutingTable (validated, immutable)
//!     → shared via routing::SharedRoutingTable
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads and compiles
//!     → atomic swap of Arc<RoutingTable>
//!     → matchers observe new table
//! ```
//!
//! # Design Decisions
//! - Rules are immutable once loaded; changes require full reload
//! - A failed reload leaves the active table in place
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_routing_table, ConfigError};
pub use schema::{IngressDocument, UnvalidatedRule};
pub use validation::ValidationError;
pub use watcher::RulesWatcher;
