//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - farmers(id, name, quantity, fertilizer_amount, address, pincode, created_at)
//! - retailers(id, name, town, pincode, created_at)
//!
//! Both tables are append-only with autoincrement primary keys; ids are never
//! reused. Secondary indexes cover pincode lookup and created_at ordering.

pub mod schema;
pub mod sqlite;

pub use sqlite::{LedgerStats, SqliteStore};
