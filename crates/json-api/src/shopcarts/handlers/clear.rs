//! Clear Shopcart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    shopcarts::{errors::into_status_error, handlers::get::ShopcartResponse},
    state::State,
};

/// Clear Shopcart Handler
///
/// Deletes every item in the cart, keeping the cart itself.
#[endpoint(
    tags("shopcarts"),
    summary = "Clear Shopcart",
    responses(
        (status_code = StatusCode::OK, description = "Shopcart cleared"),
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
        .clear_shopcart(shopcart.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
