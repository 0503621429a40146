//! Shopcart Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*, shopcarts::errors::into_status_error, shopcarts::handlers::get::ShopcartResponse,
    state::State,
};

/// Shopcart Index Handler
///
/// Returns all shopcarts, the cart owned by a customer, or the carts
/// containing a product. The customer filter wins when both are given.
#[endpoint(
    tags("shopcarts"),
    summary = "List Shopcarts",
    responses(
        (status_code = StatusCode::OK, description = "Shopcart list"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    customer_id: QueryParam<i64, false>,
    product_id: QueryParam<i64, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ShopcartResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let shopcarts = if let Some(customer) = customer_id.into_inner() {
        state
            .app
            .shopcarts
            .find_shopcart_by_customer(customer.into())
            .await
            .map_err(into_status_error)?
            .into_iter()
            .collect()
    } else if let Some(product) = product_id.into_inner() {
        state
            .app
            .shopcarts
            .find_shopcarts_with_product(product.into())
            .await
            .map_err(into_status_error)?
    } else {
        state
            .app
            .shopcarts
            .list_shopcarts()
            .await
            .map_err(into_status_error)?
    };

    Ok(Json(
        shopcarts.into_iter().map(ShopcartResponse::from).collect(),
    ))
}
