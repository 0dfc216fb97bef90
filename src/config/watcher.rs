//! Rules document watcher for hot reload.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_routing_table;
use crate::routing::{RoutingTable, SharedRoutingTable};

/// A watcher that recompiles the rules document whenever it changes.
pub struct RulesWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<RoutingTable>,
}

impl RulesWatcher {
    /// Create a new RulesWatcher.
    ///
    /// Returns the watcher and a receiver for freshly compiled tables.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<RoutingTable>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching the file in a background thread.
    ///
    /// The returned watcher must be kept alive for events to keep flowing.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx;
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!(
                            path = %path.display(),
                            "Rules file change detected, reloading"
                        );
                        match load_routing_table(&path) {
                            Ok(table) => {
                                let _ = tx.send(table);
                            }
                            Err(e) => {
                                tracing::error!(
                                    error = %e,
                                    "Failed to reload ingress rules, keeping current routing table"
                                );
                            }
                        }
                    }
                }
                Err(e) => tracing::error!(error = ?e, "Watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Rules watcher started");
        Ok(watcher)
    }
}

/// Publish every table received on `updates` into `shared` until shutdown
/// fires or the sender side is gone.
pub async fn publish_updates(
    shared: &SharedRoutingTable,
    mut updates: mpsc::UnboundedReceiver<RoutingTable>,
    shutdown: impl Future<Output = ()>,
) {
    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            update = updates.recv() => match update {
                Some(table) => shared.store(table),
                None => break,
            },
            _ = &mut shutdown => break,
        }
    }
    tracing::debug!("Rules update loop stopped");
}
