//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shopcarts_app::domain::shopcarts::data::NewCartItem;

use crate::{
    extensions::*,
    shopcarts::{
        errors::into_status_error,
        handlers::{get::CartItemResponse, parse_price, parse_quantity, require_positive},
    },
    state::State,
};

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    pub product_id: i64,
    pub quantity: Option<i64>,
    pub price: f64,
}

impl AddCartItemRequest {
    pub(crate) fn try_into_new_item(self) -> Result<NewCartItem, StatusError> {
        let product_id = require_positive(self.product_id, "product_id")?;

        Ok(NewCartItem {
            product_id: product_id.into(),
            quantity: parse_quantity(self.quantity.unwrap_or(1))?,
            price: parse_price(self.price)?,
        })
    }
}

/// Add Cart Item Handler
///
/// Adding a product already in the cart increments the stored quantity
/// instead of inserting a duplicate row.
#[endpoint(
    tags("items"),
    summary = "Add Item to Shopcart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart item created or merged"),
        (status_code = StatusCode::NOT_FOUND, description = "Shopcart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    shopcart: PathParam<i64>,
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let shopcart = shopcart.into_inner();

    let item = state
        .app
        .shopcarts
        .add_item(shopcart.into(), json.into_inner().try_into_new_item()?)
        .await
        .map_err(into_status_error)?;

    let product = item.product_id.into_i64();

    res.add_header(LOCATION, format!("/shopcarts/{shopcart}/items/{product}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(item.into()))
}
