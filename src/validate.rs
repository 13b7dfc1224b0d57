//! Field validation, enforced before a draft reaches the store
//!
//! The store itself accepts whatever it is given; every write path (CLI,
//! HTTP, registry) runs these checks first and reports failures inline.

use crate::record::{NewFarmer, NewRetailer};
use crate::{Error, Result};

/// Check a postal code: exactly 5 or 6 ASCII digits
pub fn validate_pincode(pincode: &str) -> Result<()> {
    let digits = pincode.len() >= 5 && pincode.len() <= 6;
    if digits && pincode.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(Error::validation(
            "pincode",
            format!("expected a 5-6 digit postal code, got {:?}", pincode),
        ))
    }
}

/// Check a required free-text field is non-empty after trimming
fn validate_text(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::validation(field, "must not be empty"))
    } else {
        Ok(())
    }
}

/// Check a kilogram amount is a finite non-negative number
fn validate_amount(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::validation(field, format!("must be a non-negative number, got {}", value)))
    }
}

/// Validate a farmer intake draft
pub fn validate_farmer(draft: &NewFarmer) -> Result<()> {
    validate_text("name", &draft.name)?;
    validate_amount("quantity", draft.quantity)?;
    validate_amount("fertilizer_amount", draft.fertilizer_amount)?;
    validate_text("address", &draft.address)?;
    validate_pincode(&draft.pincode)?;
    Ok(())
}

/// Validate a retailer directory draft
pub fn validate_retailer(draft: &NewRetailer) -> Result<()> {
    validate_text("name", &draft.name)?;
    validate_pincode(&draft.pincode)?;
    Ok(())
}
