//! Bulk Delete Cart Items Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shopcarts_app::domain::shopcarts::models::ProductId;

use crate::{extensions::*, shopcarts::errors::into_status_error, state::State};

/// Bulk Delete Cart Items Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BulkDeleteCartItemsRequest {
    pub product_ids: Vec<i64>,
}

/// Bulk Delete Cart Items Handler
///
/// Lenient: product ids without a matching item are skipped silently.
#[endpoint(
    tags("items"),
    summary = "Bulk Delete Cart Items",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Matching cart items deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    shopcart: PathParam<i64>,
    json: JsonBody<BulkDeleteCartItemsRequest>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products: Vec<ProductId> = json
        .into_inner()
        .product_ids
        .into_iter()
        .map(ProductId::from)
        .collect();

    state
        .app
        .shopcarts
        .remove_items(shopcart.into_inner().into(), products)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
