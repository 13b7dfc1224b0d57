//! # Mandi - Embedded farm-to-retail record ledger
//!
//! Durable, process-local storage for a produce distribution network.
//!
//! Mandi provides:
//! - Append-only farmer intake records (produce handed to a distributor)
//! - A retailer directory, seeded with defaults on first read
//! - SQLite-backed storage with auto-assigned ids and timestamp ordering
//! - Field validation enforced before anything reaches the store
//! - A CLI and a small JSON API as front ends over the same registry

pub mod config;
pub mod record;
pub mod registry;
pub mod server;
pub mod storage;
pub mod ui;
pub mod validate;

// Re-exports for convenient access
pub use record::{FarmerRecord, NewFarmer, NewRetailer, RetailerRecord};
pub use registry::Registry;
pub use storage::SqliteStore;

/// Result type alias for Mandi operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Mandi operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Validation failure for a named record field
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Error::Validation { field, reason: reason.into() }
    }

    /// True for errors raised before a record reached the store
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}
