//! Shopcart Models

use crate::ids::TypedId;

/// Shopcart Id
pub type ShopcartId = TypedId<Shopcart>;

/// Customer
pub struct Customer;

/// Customer Id
pub type CustomerId = TypedId<Customer>;

/// Product
pub struct Product;

/// Product Id
pub type ProductId = TypedId<Product>;

/// Shopcart Model
#[derive(Debug, Clone)]
pub struct Shopcart {
    pub id: ShopcartId,
    pub customer_id: CustomerId,
    pub items: Vec<CartItem>,
}

/// CartItem Model
///
/// Identified by the (shopcart, product) pair; at most one row per product
/// per shopcart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub shopcart_id: ShopcartId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: f64,
}
