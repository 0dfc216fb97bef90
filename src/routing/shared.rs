//! Hot-swappable routing table.
//!
//! # Design Decisions
//! - Single writer, many readers, no locks on the read path
//! - A new table is published with one atomic pointer swap, so readers
//!   observe the old table or the new table in full
//! - Readers take an `Arc` snapshot and can keep using it across a swap

use std::sync::Arc;

use arc_swap::ArcSwap;
use url::Url;

use crate::routing::RoutingTable;

/// Holder for the currently active [`RoutingTable`].
#[derive(Debug)]
pub struct SharedRoutingTable {
    table: ArcSwap<RoutingTable>,
}

impl SharedRoutingTable {
    /// Create a holder publishing `table`.
    pub fn new(table: RoutingTable) -> Self {
        Self {
            table: ArcSwap::from_pointee(table),
        }
    }

    /// Snapshot of the active table.
    pub fn load(&self) -> Arc<RoutingTable> {
        self.table.load_full()
    }

    /// Replace the active table.
    pub fn store(&self, table: RoutingTable) {
        let rules = table.len();
        self.table.store(Arc::new(table));
        tracing::info!(rules, "Routing table replaced");
    }

    /// Service of the first rule matching `host` and `path` in the active table.
    pub fn find_service(&self, host: &str, path: &str) -> Option<Url> {
        self.table
            .load()
            .find_matching_rule(host, path)
            .map(|rule| rule.service().clone())
    }
}

impl Default for SharedRoutingTable {
    fn default() -> Self {
        Self::new(RoutingTable::default())
    }
}
