//! Error types for the receipt CLI.

use std::path::PathBuf;

use salestax_core::CoreError;

use crate::config::ConfigError;

/// Receipt CLI errors.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cannot read orders from {path}: {source}")]
    ReadOrders {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No orders found in {0}")]
    NoOrders(PathBuf),

    #[error("Order {number}: {source}")]
    Order {
        number: usize,
        #[source]
        source: CoreError,
    },

    #[error("Cannot write receipt: {0}")]
    Write(#[from] std::io::Error),

    #[error("Cannot encode receipt: {0}")]
    Json(#[from] serde_json::Error),
}
