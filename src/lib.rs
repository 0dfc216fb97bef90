//! Ingress rule compilation and matching for a tunnel agent.
//!
//! A rules document maps hostnames and paths to origin services. It is
//! compiled once into an immutable [`RoutingTable`], then every inbound
//! request is matched against it, first match wins.
//!
//! ```
//! let table = ingress_router::compile(br#"
//! ingress:
//!   - hostname: "*.example.com"
//!     path: /static/.*\.html
//!     service: http://localhost:8000
//!   - service: http://localhost:8001
//! "#).unwrap();
//!
//! let rule = table.find_matching_rule("www.example.com", "/static/index.html").unwrap();
//! assert_eq!(rule.service().port(), Some(8000));
//! ```

pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::{load_routing_table, ConfigError, ValidationError};
pub use routing::{compile, IngressError, Rule, RoutingTable, SharedRoutingTable};
