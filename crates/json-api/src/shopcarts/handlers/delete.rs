//! Delete Shopcart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, shopcarts::errors::into_status_error, state::State};

/// Delete Shopcart Handler
///
/// Idempotent: deleting an absent cart still returns 204.
#[endpoint(
    tags("shopcarts"),
    summary = "Delete Shopcart",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Shopcart deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    shopcart: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .shopcarts
        .delete_shopcart(shopcart.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
