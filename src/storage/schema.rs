//! Database schema definitions

/// SQL to create the farmers table
///
/// AUTOINCREMENT keeps ids monotonically increasing and never reused, even
/// after the highest-id row is gone.
pub const CREATE_FARMERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS farmers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    quantity REAL NOT NULL,
    fertilizer_amount REAL NOT NULL,
    address TEXT NOT NULL,
    pincode TEXT NOT NULL,
    created_at INTEGER NOT NULL
)
"#;

/// SQL to create the retailers table
pub const CREATE_RETAILERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS retailers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    town TEXT NOT NULL,
    pincode TEXT NOT NULL,
    created_at INTEGER NOT NULL
)
"#;

/// SQL to create indexes (pincode lookup, created_at ordering)
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_farmers_pincode ON farmers(pincode)",
    "CREATE INDEX IF NOT EXISTS idx_farmers_created_at ON farmers(created_at)",
    "CREATE INDEX IF NOT EXISTS idx_retailers_pincode ON retailers(pincode)",
    "CREATE INDEX IF NOT EXISTS idx_retailers_created_at ON retailers(created_at)",
];

/// All schema creation statements, idempotent and safe to re-run on open
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_FARMERS_TABLE, CREATE_RETAILERS_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
