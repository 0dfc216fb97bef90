//! Route lookup.
//!
//! # Responsibilities
//! - Store compiled rules in document order
//! - Look up the first rule matching a request's host and path
//! - Return matched rule or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan, first match wins
//! - Explicit NoMatch (`None`) rather than silent default

use crate::routing::rule::Rule;

/// Ordered, validated set of ingress rules.
///
/// Produced by [`compile`](crate::routing::compile), which guarantees a
/// single trailing catch-all. `RoutingTable::default()` is the empty table
/// and matches nothing.
#[derive(Debug, Clone, Default)]
pub struct RoutingTable {
    rules: Vec<Rule>,
}

impl RoutingTable {
    pub(crate) fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the first rule matching `host` and `path`.
    pub fn find_matching_rule(&self, host: &str, path: &str) -> Option<&Rule> {
        self.find_matching_index(host, path).map(|(_, rule)| rule)
    }

    /// Like [`find_matching_rule`](Self::find_matching_rule), also returning
    /// the rule's 0-based position.
    pub fn find_matching_index(&self, host: &str, path: &str) -> Option<(usize, &Rule)> {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches(host, path))
    }
}
