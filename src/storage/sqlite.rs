//! SQLite storage implementation

use super::schema;
use crate::record::{now_millis, FarmerRecord, NewFarmer, NewRetailer, RetailerRecord};
use crate::Result;
use rusqlite::{params, Connection};
use std::path::Path;

/// SQLite-backed store for farmer intake and retailer directory records.
///
/// The store performs no validation: callers are expected to validate drafts
/// before handing them over. Every insert stamps `created_at` exactly once;
/// stored records are never updated or deleted.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Farmer Operations ==========

    /// Insert a farmer intake record, stamping `created_at` with the current
    /// time. Returns the assigned id.
    pub fn add_farmer(&self, draft: &NewFarmer) -> Result<i64> {
        self.add_farmer_at(draft, now_millis())
    }

    /// Insert a farmer intake record with an explicit creation timestamp
    pub fn add_farmer_at(&self, draft: &NewFarmer, created_at: i64) -> Result<i64> {
        self.conn.execute(
            r#"
            INSERT INTO farmers (name, quantity, fertilizer_amount, address, pincode, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                draft.name,
                draft.quantity,
                draft.fertilizer_amount,
                draft.address,
                draft.pincode,
                created_at,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// List all farmer records, most recent first.
    ///
    /// Re-executable: each call runs a fresh query, not a one-shot cursor.
    pub fn list_farmers(&self) -> Result<Vec<FarmerRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, quantity, fertilizer_amount, address, pincode, created_at
             FROM farmers ORDER BY created_at DESC, id DESC",
        )?;

        let records = stmt
            .query_map([], |row| self.row_to_farmer(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(records)
    }

    /// Find farmer records by exact pincode, most recent first
    pub fn find_farmers_by_pincode(&self, pincode: &str) -> Result<Vec<FarmerRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, quantity, fertilizer_amount, address, pincode, created_at
             FROM farmers WHERE pincode = ?1 ORDER BY created_at DESC, id DESC",
        )?;

        let records = stmt
            .query_map([pincode], |row| self.row_to_farmer(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(records)
    }

    /// Count all farmer records
    pub fn count_farmers(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM farmers", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Helper to convert a row to a FarmerRecord
    fn row_to_farmer(&self, row: &rusqlite::Row) -> rusqlite::Result<FarmerRecord> {
        Ok(FarmerRecord {
            id: row.get(0)?,
            name: row.get(1)?,
            quantity: row.get(2)?,
            fertilizer_amount: row.get(3)?,
            address: row.get(4)?,
            pincode: row.get(5)?,
            created_at: row.get(6)?,
        })
    }

    // ========== Retailer Operations ==========

    /// Insert a retailer directory record, stamping `created_at` with the
    /// current time. Returns the assigned id.
    pub fn add_retailer(&self, draft: &NewRetailer) -> Result<i64> {
        self.add_retailer_at(draft, now_millis())
    }

    /// Insert a retailer directory record with an explicit creation timestamp
    pub fn add_retailer_at(&self, draft: &NewRetailer, created_at: i64) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO retailers (name, town, pincode, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![draft.name, draft.town, draft.pincode, created_at],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert several retailer records in one transaction.
    ///
    /// All-or-nothing: if any insert fails the transaction rolls back and no
    /// partial batch is visible.
    pub fn bulk_add_retailers(&mut self, drafts: &[NewRetailer]) -> Result<Vec<i64>> {
        let created_at = now_millis();
        let tx = self.conn.transaction()?;
        let mut ids = Vec::with_capacity(drafts.len());
        for draft in drafts {
            tx.execute(
                "INSERT INTO retailers (name, town, pincode, created_at) VALUES (?1, ?2, ?3, ?4)",
                params![draft.name, draft.town, draft.pincode, created_at],
            )?;
            ids.push(tx.last_insert_rowid());
        }
        tx.commit()?;
        Ok(ids)
    }

    /// List all retailer records, most recent first
    pub fn list_retailers(&self) -> Result<Vec<RetailerRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, town, pincode, created_at
             FROM retailers ORDER BY created_at DESC, id DESC",
        )?;

        let records = stmt
            .query_map([], |row| self.row_to_retailer(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(records)
    }

    /// Count all retailer records
    pub fn count_retailers(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM retailers", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Helper to convert a row to a RetailerRecord
    fn row_to_retailer(&self, row: &rusqlite::Row) -> rusqlite::Result<RetailerRecord> {
        Ok(RetailerRecord {
            id: row.get(0)?,
            name: row.get(1)?,
            town: row.get(2)?,
            pincode: row.get(3)?,
            created_at: row.get(4)?,
        })
    }

    /// Get record counts for both tables
    pub fn stats(&self) -> Result<LedgerStats> {
        Ok(LedgerStats {
            farmers: self.count_farmers()?,
            retailers: self.count_retailers()?,
        })
    }
}

/// Record counts across the ledger
#[derive(Debug, Clone, serde::Serialize)]
pub struct LedgerStats {
    pub farmers: usize,
    pub retailers: usize,
}

impl std::fmt::Display for LedgerStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Ledger Statistics:")?;
        writeln!(f, "  Farmers: {}", self.farmers)?;
        writeln!(f, "  Retailers: {}", self.retailers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_farmer(name: &str) -> NewFarmer {
        NewFarmer::new(name, 500.0, 50.0, "Village X", "751001")
    }

    #[test]
    fn test_add_and_list_farmer() {
        let store = SqliteStore::open_in_memory().unwrap();

        let id = store.add_farmer(&sample_farmer("Ramesh Kumar")).unwrap();
        assert!(id > 0);

        let farmers = store.list_farmers().unwrap();
        assert_eq!(farmers.len(), 1);
        assert_eq!(farmers[0].id, id);
        assert_eq!(farmers[0].name, "Ramesh Kumar");
        assert_eq!(farmers[0].quantity, 500.0);
        assert_eq!(farmers[0].fertilizer_amount, 50.0);
        assert_eq!(farmers[0].address, "Village X");
        assert_eq!(farmers[0].pincode, "751001");
        assert!(farmers[0].created_at > 0);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let store = SqliteStore::open_in_memory().unwrap();

        let a = store.add_farmer(&sample_farmer("A")).unwrap();
        let b = store.add_farmer(&sample_farmer("B")).unwrap();
        let c = store.add_retailer(&NewRetailer::new("R", "Town", "75100")).unwrap();

        assert!(b > a);
        // Retailer ids are independent of farmer ids
        assert_eq!(c, 1);
    }

    #[test]
    fn test_list_orders_by_created_at_desc() {
        let store = SqliteStore::open_in_memory().unwrap();

        let older = store.add_farmer_at(&sample_farmer("Older"), 1_000).unwrap();
        let newer = store.add_farmer_at(&sample_farmer("Newer"), 2_000).unwrap();

        let farmers = store.list_farmers().unwrap();
        assert_eq!(farmers[0].id, newer);
        assert_eq!(farmers[1].id, older);
    }

    #[test]
    fn test_equal_timestamps_break_ties_by_id() {
        let store = SqliteStore::open_in_memory().unwrap();

        store.add_farmer_at(&sample_farmer("First"), 1_000).unwrap();
        store.add_farmer_at(&sample_farmer("Second"), 1_000).unwrap();

        let farmers = store.list_farmers().unwrap();
        assert_eq!(farmers[0].name, "Second");
        assert_eq!(farmers[1].name, "First");
    }

    #[test]
    fn test_listing_is_repeatable() {
        let store = SqliteStore::open_in_memory().unwrap();

        store.add_retailer(&NewRetailer::new("Odisha Fresh Mart", "Bhubaneswar", "751001")).unwrap();
        store.add_retailer(&NewRetailer::new("Jagannath Grocers", "Puri", "752001")).unwrap();

        let first = store.list_retailers().unwrap();
        let second = store.list_retailers().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_bulk_add_retailers() {
        let mut store = SqliteStore::open_in_memory().unwrap();

        let drafts = vec![
            NewRetailer::new("Odisha Fresh Mart", "Bhubaneswar", "751001"),
            NewRetailer::new("Jagannath Grocers", "Puri", "752001"),
        ];
        let ids = store.bulk_add_retailers(&drafts).unwrap();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
        assert_eq!(store.count_retailers().unwrap(), 2);
    }

    #[test]
    fn test_find_farmers_by_pincode() {
        let store = SqliteStore::open_in_memory().unwrap();

        store.add_farmer(&sample_farmer("Ramesh Kumar")).unwrap();
        let mut other = sample_farmer("Sita Devi");
        other.pincode = "752001".into();
        store.add_farmer(&other).unwrap();

        let hits = store.find_farmers_by_pincode("751001").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ramesh Kumar");
    }

    #[test]
    fn test_stats() {
        let store = SqliteStore::open_in_memory().unwrap();

        store.add_farmer(&sample_farmer("A")).unwrap();
        store.add_retailer(&NewRetailer::new("R", "Town", "75100")).unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(stats.farmers, 1);
        assert_eq!(stats.retailers, 1);
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mandi.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.add_farmer(&sample_farmer("Ramesh Kumar")).unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        let farmers = store.list_farmers().unwrap();
        assert_eq!(farmers.len(), 1);
        assert_eq!(farmers[0].name, "Ramesh Kumar");
    }
}
