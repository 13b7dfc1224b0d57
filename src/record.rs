//! Record types for the ledger
//!
//! Two record kinds exist, both append-only:
//! - `FarmerRecord`: a farmer intake entry (produce handed to a distributor)
//! - `RetailerRecord`: a retailer directory entry
//!
//! Persisted records carry a store-assigned `id` and an epoch-millisecond
//! `created_at` stamped once at insertion. The `New*` drafts are what callers
//! build; the store fills in the rest.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time as epoch milliseconds
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// A persisted farmer intake record.
///
/// Immutable after insertion: no update or delete is exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmerRecord {
    /// Unique, monotonically increasing id assigned by the store
    pub id: i64,
    /// Farmer name
    pub name: String,
    /// Produce quantity in kilograms
    pub quantity: f64,
    /// Fertilizer issued in kilograms
    pub fertilizer_amount: f64,
    /// Free-text address
    pub address: String,
    /// 5-or-6-digit postal code
    pub pincode: String,
    /// Epoch milliseconds, set once at insertion
    pub created_at: i64,
}

/// A persisted retailer directory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetailerRecord {
    /// Unique, monotonically increasing id assigned by the store
    pub id: i64,
    /// Retailer name
    pub name: String,
    /// Town or city
    pub town: String,
    /// 5-or-6-digit postal code
    pub pincode: String,
    /// Epoch milliseconds, set once at insertion
    pub created_at: i64,
}

/// Draft of a farmer record, before the store assigns `id` and `created_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFarmer {
    pub name: String,
    pub quantity: f64,
    pub fertilizer_amount: f64,
    pub address: String,
    pub pincode: String,
}

impl NewFarmer {
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        fertilizer_amount: f64,
        address: impl Into<String>,
        pincode: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            fertilizer_amount,
            address: address.into(),
            pincode: pincode.into(),
        }
    }
}

/// Draft of a retailer record, before the store assigns `id` and `created_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRetailer {
    pub name: String,
    pub town: String,
    pub pincode: String,
}

impl NewRetailer {
    pub fn new(name: impl Into<String>, town: impl Into<String>, pincode: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            town: town.into(),
            pincode: pincode.into(),
        }
    }
}

impl FarmerRecord {
    /// One-line summary for display
    pub fn summary(&self) -> String {
        format!(
            "{} - Qty {} kg, Fertilizer {} kg, PIN {}",
            self.name, self.quantity, self.fertilizer_amount, self.pincode
        )
    }
}

impl RetailerRecord {
    /// One-line summary for display
    pub fn summary(&self) -> String {
        format!("{} ({}, PIN {})", self.name, self.town, self.pincode)
    }
}
