//! Rules document loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::routing::{compile, IngressError, RoutingTable};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Ingress(#[from] IngressError),
}

/// Read a rules document and compile it into a routing table.
pub fn load_routing_table(path: &Path) -> Result<RoutingTable, ConfigError> {
    let content = fs::read(path)?;
    let table = compile(&content)?;

    tracing::info!(path = %path.display(), rules = table.len(), "Ingress rules loaded");
    Ok(table)
}
