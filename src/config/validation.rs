//! Rule validation.
//!
//! # Responsibilities
//! - Parse each rule's service into an absolute URL
//! - Compile each rule's path regex
//! - Enforce table invariants (exactly one catch-all, last, without a path)
//!
//! # Design Decisions
//! - Stops at the first violation; the whole document is rejected
//! - Rule numbers in messages are 1-based, in document order
//! - Validation is pure: no logging, no shared state

use regex::Regex;
use thiserror::Error;
use url::Url;

use crate::routing::Rule;

/// A document that parsed but breaks a rule-language invariant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Document is empty or has no `ingress` entries.
    #[error("no ingress rules were specified")]
    NoRules,

    /// A rule has no `service` key.
    #[error("rule #{rule} is missing the required `service` key")]
    MissingService { rule: usize },

    /// The service could not be parsed as a URL.
    #[error("rule #{rule}: service {service:?} is not a valid URL: {reason}")]
    InvalidService {
        rule: usize,
        service: String,
        reason: String,
    },

    /// The service parsed but has no hostname, e.g. `localhost:8000`.
    #[error(
        "rule #{rule}: service {service:?} must be an absolute URL with a scheme and hostname, \
         e.g. http://localhost:8000"
    )]
    ServiceMissingHost { rule: usize, service: String },

    /// The path is not a valid regular expression.
    #[error("rule #{rule}: path {path:?} is not a valid regex: {reason}")]
    InvalidPath {
        rule: usize,
        path: String,
        reason: String,
    },

    /// The final rule does not match every hostname.
    #[error("the last ingress rule must match all hostnames (omit `hostname` or set it to \"*\")")]
    LastRuleNotCatchAll,

    /// A catch-all appears before the end and would shadow later rules.
    #[error("rule #{rule} matches all hostnames but is not the last rule, so later rules are unreachable")]
    CatchAllNotLast { rule: usize },

    /// The catch-all carries a path restriction.
    #[error("rule #{rule} is the catch-all rule and cannot have a path")]
    CatchAllWithPath { rule: usize },
}

/// Parse a rule's service into an absolute URL.
pub fn parse_service(rule: usize, raw: Option<&str>) -> Result<Url, ValidationError> {
    let raw = raw.ok_or(ValidationError::MissingService { rule })?;

    // Url::parse silently drops tabs and newlines and trims spaces
    if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ValidationError::InvalidService {
            rule,
            service: raw.to_string(),
            reason: "contains whitespace or control characters".to_string(),
        });
    }

    let service = Url::parse(raw).map_err(|e| ValidationError::InvalidService {
        rule,
        service: raw.to_string(),
        reason: e.to_string(),
    })?;

    match service.host_str() {
        Some(host) if !host.is_empty() && !service.scheme().is_empty() => Ok(service),
        _ => Err(ValidationError::ServiceMissingHost {
            rule,
            service: raw.to_string(),
        }),
    }
}

/// Compile a rule's path. An empty path is the same as none.
pub fn compile_path(rule: usize, raw: Option<&str>) -> Result<Option<Regex>, ValidationError> {
    match raw {
        None | Some("") => Ok(None),
        Some(path) => Regex::new(path)
            .map(Some)
            .map_err(|e| ValidationError::InvalidPath {
                rule,
                path: path.to_string(),
                reason: e.to_string(),
            }),
    }
}

/// Check table-level invariants over rules in document order.
pub fn validate_rules(rules: &[Rule]) -> Result<(), ValidationError> {
    let Some((last, rest)) = rules.split_last() else {
        return Err(ValidationError::NoRules);
    };

    if let Some(index) = rest.iter().position(Rule::is_catch_all) {
        return Err(ValidationError::CatchAllNotLast { rule: index + 1 });
    }

    if !last.is_catch_all() {
        return Err(ValidationError::LastRuleNotCatchAll);
    }

    if last.path().is_some() {
        return Err(ValidationError::CatchAllWithPath { rule: rules.len() });
    }

    Ok(())
}
