//! Shopcart Handlers

use salvo::prelude::StatusError;

pub(crate) mod clear;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

/// Validate a wire id as a positive integer.
pub(crate) fn require_positive(value: i64, field: &str) -> Result<i64, StatusError> {
    if value < 1 {
        return Err(
            StatusError::bad_request().brief(format!("{field} must be a positive integer"))
        );
    }

    Ok(value)
}

/// Validate a wire quantity as a positive integer.
pub(crate) fn parse_quantity(value: i64) -> Result<u32, StatusError> {
    u32::try_from(value)
        .ok()
        .filter(|quantity| *quantity > 0)
        .ok_or_else(|| StatusError::bad_request().brief("quantity must be a positive integer"))
}

/// Validate a wire price as a non-negative number.
pub(crate) fn parse_price(value: f64) -> Result<f64, StatusError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(StatusError::bad_request().brief("price must be a non-negative number"))
    }
}
