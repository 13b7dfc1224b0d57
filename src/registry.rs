//! Registry - the write/read surface front ends talk to
//!
//! Wraps the store with the two concerns the store deliberately leaves out:
//! validation before every insert, and seeding the retailer directory so a
//! first-time reader never sees an empty list.

use crate::record::{FarmerRecord, NewFarmer, NewRetailer, RetailerRecord};
use crate::storage::{LedgerStats, SqliteStore};
use crate::{validate, Result};
use std::path::Path;

/// Default retailer directory entries, inserted once if the table is empty
/// on first read.
pub const DEFAULT_RETAILERS: &[(&str, &str, &str)] = &[
    ("Odisha Fresh Mart", "Bhubaneswar", "751001"),
    ("Jagannath Grocers", "Puri", "752001"),
];

/// Validated access to the record ledger
pub struct Registry {
    store: SqliteStore,
}

impl Registry {
    /// Wrap an already-open store
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    /// Open (or create) the ledger at the given path
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(SqliteStore::open(path)?))
    }

    /// Open an in-memory ledger (for testing)
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(SqliteStore::open_in_memory()?))
    }

    /// Validate and insert a farmer intake record. Returns the assigned id.
    ///
    /// A validation failure means nothing was written.
    pub fn record_farmer(&self, draft: &NewFarmer) -> Result<i64> {
        validate::validate_farmer(draft)?;
        let id = self.store.add_farmer(draft)?;
        tracing::info!(id, name = %draft.name, pincode = %draft.pincode, "recorded farmer intake");
        Ok(id)
    }

    /// Validate and insert a retailer directory record. Returns the assigned id.
    pub fn record_retailer(&self, draft: &NewRetailer) -> Result<i64> {
        validate::validate_retailer(draft)?;
        let id = self.store.add_retailer(draft)?;
        tracing::info!(id, name = %draft.name, "recorded retailer");
        Ok(id)
    }

    /// All farmer intake records, most recent first
    pub fn farmers(&self) -> Result<Vec<FarmerRecord>> {
        self.store.list_farmers()
    }

    /// Farmer intake records for one postal code, most recent first
    pub fn farmers_by_pincode(&self, pincode: &str) -> Result<Vec<FarmerRecord>> {
        self.store.find_farmers_by_pincode(pincode)
    }

    /// All retailer directory records, most recent first.
    ///
    /// Seeds [`DEFAULT_RETAILERS`] in a single transaction if the table is
    /// empty, then re-lists, so callers never observe an empty directory.
    pub fn retailers(&mut self) -> Result<Vec<RetailerRecord>> {
        let listed = self.store.list_retailers()?;
        if !listed.is_empty() {
            return Ok(listed);
        }

        let seed: Vec<NewRetailer> = DEFAULT_RETAILERS
            .iter()
            .map(|(name, town, pincode)| NewRetailer::new(*name, *town, *pincode))
            .collect();
        self.store.bulk_add_retailers(&seed)?;
        tracing::info!(count = seed.len(), "seeded empty retailer directory");

        self.store.list_retailers()
    }

    /// Record counts for both tables
    pub fn stats(&self) -> Result<LedgerStats> {
        self.store.stats()
    }

    /// Direct access to the underlying store
    pub fn store(&self) -> &SqliteStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_farmer() -> NewFarmer {
        NewFarmer::new("Ramesh Kumar", 500.0, 50.0, "Village X", "751001")
    }

    #[test]
    fn test_record_farmer_then_list() {
        let registry = Registry::open_in_memory().unwrap();

        let id = registry.record_farmer(&sample_farmer()).unwrap();

        let farmers = registry.farmers().unwrap();
        assert_eq!(farmers[0].id, id);
        assert_eq!(farmers[0].name, "Ramesh Kumar");
        assert_eq!(farmers[0].quantity, 500.0);
        assert_eq!(farmers[0].fertilizer_amount, 50.0);
        assert_eq!(farmers[0].address, "Village X");
        assert_eq!(farmers[0].pincode, "751001");
    }

    #[test]
    fn test_latest_insert_lists_first() {
        let registry = Registry::open_in_memory().unwrap();

        registry.record_farmer(&sample_farmer()).unwrap();
        let mut second = sample_farmer();
        second.name = "Sita Devi".into();
        let id = registry.record_farmer(&second).unwrap();

        let farmers = registry.farmers().unwrap();
        assert_eq!(farmers[0].id, id);
        assert_eq!(farmers[0].name, "Sita Devi");
    }

    #[test]
    fn test_short_pincode_writes_nothing() {
        let registry = Registry::open_in_memory().unwrap();

        let mut draft = sample_farmer();
        draft.pincode = "12".into();
        let err = registry.record_farmer(&draft).unwrap_err();
        assert!(err.is_validation());

        assert!(registry.farmers().unwrap().is_empty());
    }

    #[test]
    fn test_empty_directory_gets_seeded() {
        let mut registry = Registry::open_in_memory().unwrap();

        let retailers = registry.retailers().unwrap();
        assert_eq!(retailers.len(), 2);

        let names: Vec<&str> = retailers.iter().map(|r| r.name.as_str()).collect();
        assert!(names.contains(&"Odisha Fresh Mart"));
        assert!(names.contains(&"Jagannath Grocers"));

        let bbsr = retailers.iter().find(|r| r.name == "Odisha Fresh Mart").unwrap();
        assert_eq!(bbsr.town, "Bhubaneswar");
        assert_eq!(bbsr.pincode, "751001");
        let puri = retailers.iter().find(|r| r.name == "Jagannath Grocers").unwrap();
        assert_eq!(puri.town, "Puri");
        assert_eq!(puri.pincode, "752001");
    }

    #[test]
    fn test_seeding_happens_once() {
        let mut registry = Registry::open_in_memory().unwrap();

        registry.retailers().unwrap();
        let again = registry.retailers().unwrap();
        assert_eq!(again.len(), 2);
    }

    #[test]
    fn test_existing_directory_not_seeded() {
        let mut registry = Registry::open_in_memory().unwrap();

        registry
            .record_retailer(&NewRetailer::new("Cuttack Kirana", "Cuttack", "753001"))
            .unwrap();

        let retailers = registry.retailers().unwrap();
        assert_eq!(retailers.len(), 1);
        assert_eq!(retailers[0].name, "Cuttack Kirana");
    }

    #[test]
    fn test_repeat_listing_is_stable() {
        let mut registry = Registry::open_in_memory().unwrap();

        registry.retailers().unwrap();
        let first = registry.retailers().unwrap();
        let second = registry.retailers().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_stats_counts_both_tables() {
        let mut registry = Registry::open_in_memory().unwrap();

        registry.record_farmer(&sample_farmer()).unwrap();
        registry.retailers().unwrap(); // triggers seeding

        let stats = registry.stats().unwrap();
        assert_eq!(stats.farmers, 1);
        assert_eq!(stats.retailers, 2);
    }
}
