//! Update Shopcart Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use crate::{
    extensions::*,
    shopcarts::{
        errors::into_status_error,
        handlers::{create::ShopcartPayload, get::ShopcartResponse},
    },
    state::State,
};

/// Update Shopcart Handler
///
/// Full-replace semantics: the cart's customer and item list are replaced
/// wholesale by the payload.
#[endpoint(
    tags("shopcarts"),
    summary = "Update Shopcart",
    responses(
        (status_code = StatusCode::OK, description = "Shopcart replaced"),
        (status_code = StatusCode::NOT_FOUND, description = "Shopcart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    shopcart: PathParam<i64>,
    json: JsonBody<ShopcartPayload>,
    depot: &mut Depot,
) -> Result<Json<ShopcartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .shopcarts
        .replace_shopcart(
            shopcart.into_inner().into(),
            json.into_inner().try_into_new()?,
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use shopcarts_app::domain::shopcarts::{MockShopcartsService, ShopcartsServiceError};

    use crate::test_helpers::{make_item, make_shopcart, shopcarts_service};

    use super::*;

    fn make_service(repo: MockShopcartsService) -> Service {
        shopcarts_service(repo, Router::with_path("shopcarts/{shopcart}").put(handler))
    }

    #[tokio::test]
    async fn test_update_shopcart_replaces_items() -> TestResult {
        let mut cart = make_shopcart(1, 55);

        cart.items.push(make_item(1, 9, 3, 4.50));

        let mut repo = MockShopcartsService::new();

        repo.expect_replace_shopcart()
            .once()
            .withf(|shopcart, new| {
                shopcart.into_i64() == 1
                    && new.customer_id.into_i64() == 55
                    && new.items.len() == 1
                    && new.items[0].product_id.into_i64() == 9
            })
            .return_once(move |_, _| Ok(cart));

        repo.expect_create_shopcart().never();
        repo.expect_get_shopcart().never();

        let mut res = TestClient::put("http://example.com/shopcarts/1")
            .json(&json!({
                "customer_id": 55,
                "items": [
                    { "shopcart_id": 1, "product_id": 9, "quantity": 3, "price": 4.50 },
                ],
            }))
            .send(&make_service(repo))
            .await;

        let body: ShopcartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.customer_id, 55);
        assert_eq!(body.items.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_shopcart_not_found_returns_404() -> TestResult {
        let mut repo = MockShopcartsService::new();

        repo.expect_replace_shopcart()
            .once()
            .return_once(|_, _| Err(ShopcartsServiceError::NotFound));

        let res = TestClient::put("http://example.com/shopcarts/999")
            .json(&json!({ "customer_id": 55, "items": [] }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_shopcart_invalid_item_quantity_returns_400() -> TestResult {
        let mut repo = MockShopcartsService::new();

        repo.expect_replace_shopcart().never();

        let res = TestClient::put("http://example.com/shopcarts/1")
            .json(&json!({
                "customer_id": 55,
                "items": [
                    { "shopcart_id": 1, "product_id": 9, "quantity": 0, "price": 4.50 },
                ],
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
