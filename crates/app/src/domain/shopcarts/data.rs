//! Shopcart Data

use crate::domain::shopcarts::models::{CustomerId, ProductId};

/// New Shopcart Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewShopcart {
    pub customer_id: CustomerId,
    pub items: Vec<NewCartItem>,
}

/// New Cart Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: f64,
}

/// Cart Item Update Data
///
/// Applies whichever fields are supplied; `None` leaves the stored value
/// untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartItemUpdate {
    pub quantity: Option<u32>,
    pub price: Option<f64>,
}
