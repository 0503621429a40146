//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shopcarts_app::domain::shopcarts::data::CartItemUpdate;

use crate::{
    extensions::*,
    shopcarts::{
        errors::into_status_error,
        handlers::{get::CartItemResponse, parse_price, parse_quantity},
    },
    state::State,
};

/// Update Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    pub quantity: Option<i64>,
    pub price: Option<f64>,
}

impl UpdateCartItemRequest {
    pub(crate) fn try_into_update(self) -> Result<CartItemUpdate, StatusError> {
        Ok(CartItemUpdate {
            quantity: self.quantity.map(parse_quantity).transpose()?,
            price: self.price.map(parse_price).transpose()?,
        })
    }
}

/// Update Cart Item Handler
///
/// Applies whichever of quantity and price are supplied.
#[endpoint(
    tags("items"),
    summary = "Update Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Cart item updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Shopcart or item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    shopcart: PathParam<i64>,
    product: PathParam<i64>,
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .shopcarts
        .update_item(
            shopcart.into_inner().into(),
            product.into_inner().into(),
            json.into_inner().try_into_update()?,
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(item.into()))
}
