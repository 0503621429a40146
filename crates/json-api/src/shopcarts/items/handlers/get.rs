//! Get Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    shopcarts::{errors::into_status_error, handlers::get::CartItemResponse},
    state::State,
};

/// Get Cart Item Handler
#[endpoint(
    tags("items"),
    summary = "Get Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Cart item found"),
        (status_code = StatusCode::NOT_FOUND, description = "Shopcart or item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    shopcart: PathParam<i64>,
    product: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<CartItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .shopcarts
        .get_item(shopcart.into_inner().into(), product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(item.into()))
}
