//! Get Shopcart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shopcarts_app::domain::shopcarts::models::{CartItem, Shopcart};

use crate::{extensions::*, shopcarts::errors::into_status_error, state::State};

/// Shopcart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShopcartResponse {
    /// The store-assigned shopcart id
    pub id: i64,

    /// The owning customer id
    pub customer_id: i64,

    /// The items in the shopcart
    pub items: Vec<CartItemResponse>,
}

impl From<Shopcart> for ShopcartResponse {
    fn from(shopcart: Shopcart) -> Self {
        Self {
            id: shopcart.id.into_i64(),
            customer_id: shopcart.customer_id.into_i64(),
            items: shopcart
                .items
                .into_iter()
                .map(CartItemResponse::from)
                .collect(),
        }
    }
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// The owning shopcart id
    pub shopcart_id: i64,

    /// The product this line item is for
    pub product_id: i64,

    /// The quantity of the product in the cart
    pub quantity: u32,

    /// The unit price of the product
    pub price: f64,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            shopcart_id: item.shopcart_id.into_i64(),
            product_id: item.product_id.into_i64(),
            quantity: item.quantity,
            price: item.price,
        }
    }
}

/// Get Shopcart Handler
///
/// Returns a shopcart with its items.
#[endpoint(
    tags("shopcarts"),
    summary = "Get Shopcart",
    responses(
        (status_code = StatusCode::OK, description = "Shopcart found"),
        (status_code = StatusCode::NOT_FOUND, description = "Shopcart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    shopcart: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ShopcartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .shopcarts
        .get_shopcart(shopcart.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
