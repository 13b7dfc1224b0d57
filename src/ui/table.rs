use crate::record::{FarmerRecord, RetailerRecord};
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct FarmerRow {
    #[tabled(rename = "Id")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Qty (kg)")]
    quantity: f64,
    #[tabled(rename = "Fertilizer (kg)")]
    fertilizer: f64,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "PIN")]
    pincode: String,
}

#[derive(Tabled)]
struct RetailerRow {
    #[tabled(rename = "Id")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Town")]
    town: String,
    #[tabled(rename = "PIN")]
    pincode: String,
}

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Render farmer records (already ordered most recent first) as a table
pub fn farmers_table(records: &[FarmerRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }
    let rows: Vec<FarmerRow> = records
        .iter()
        .map(|r| FarmerRow {
            id: r.id,
            name: r.name.clone(),
            quantity: r.quantity,
            fertilizer: r.fertilizer_amount,
            address: r.address.clone(),
            pincode: r.pincode.clone(),
        })
        .collect();
    Table::new(&rows).with(Style::rounded()).to_string()
}

/// Render retailer records as a table
pub fn retailers_table(records: &[RetailerRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }
    let rows: Vec<RetailerRow> = records
        .iter()
        .map(|r| RetailerRow {
            id: r.id,
            name: r.name.clone(),
            town: r.town.clone(),
            pincode: r.pincode.clone(),
        })
        .collect();
    Table::new(&rows).with(Style::rounded()).to_string()
}

/// Render label/value pairs as a metrics table
pub fn stats_table(stats: &[(&str, String)]) -> String {
    let rows: Vec<StatRow> = stats
        .iter()
        .map(|(label, value)| StatRow { metric: label.to_string(), value: value.clone() })
        .collect();
    Table::new(&rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_listing_renders_nothing() {
        assert_eq!(farmers_table(&[]), "");
        assert_eq!(retailers_table(&[]), "");
    }

    #[test]
    fn test_farmer_table_contains_fields() {
        let records = vec![FarmerRecord {
            id: 1,
            name: "Ramesh Kumar".into(),
            quantity: 500.0,
            fertilizer_amount: 50.0,
            address: "Village X".into(),
            pincode: "751001".into(),
            created_at: 0,
        }];
        let rendered = farmers_table(&records);
        assert!(rendered.contains("Ramesh Kumar"));
        assert!(rendered.contains("751001"));
    }
}
