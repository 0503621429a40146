//! Create Shopcart Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shopcarts_app::domain::shopcarts::data::{NewCartItem, NewShopcart};

use crate::{
    extensions::*,
    shopcarts::{
        errors::into_status_error,
        handlers::{get::ShopcartResponse, parse_price, parse_quantity, require_positive},
    },
    state::State,
};

/// Shopcart Payload
///
/// Body of both the create and the full-replace endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShopcartPayload {
    pub customer_id: i64,
    #[serde(default)]
    pub items: Vec<CartItemPayload>,
}

impl ShopcartPayload {
    pub(crate) fn try_into_new(self) -> Result<NewShopcart, StatusError> {
        let customer_id = require_positive(self.customer_id, "customer_id")?;

        let items = self
            .items
            .into_iter()
            .map(CartItemPayload::try_into_new_item)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NewShopcart {
            customer_id: customer_id.into(),
            items,
        })
    }
}

/// Cart Item Payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemPayload {
    pub shopcart_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub price: f64,
}

impl CartItemPayload {
    /// The wire contract requires `shopcart_id` on every item, but the cart
    /// the server attaches the item to is the authoritative owner.
    pub(crate) fn try_into_new_item(self) -> Result<NewCartItem, StatusError> {
        require_positive(self.shopcart_id, "shopcart_id")?;

        let product_id = require_positive(self.product_id, "product_id")?;

        Ok(NewCartItem {
            product_id: product_id.into(),
            quantity: parse_quantity(self.quantity)?,
            price: parse_price(self.price)?,
        })
    }
}

/// Create Shopcart Handler
#[endpoint(
    tags("shopcarts"),
    summary = "Create Shopcart",
    responses(
        (status_code = StatusCode::CREATED, description = "Shopcart created"),
        (status_code = StatusCode::CONFLICT, description = "Shopcart already exists for customer"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ShopcartPayload>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ShopcartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .shopcarts
        .create_shopcart(json.into_inner().try_into_new()?)
        .await
        .map_err(into_status_error)?;

    let id = cart.id.into_i64();

    res.add_header(LOCATION, format!("/shopcarts/{id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use shopcarts_app::domain::shopcarts::{MockShopcartsService, ShopcartsServiceError};

    use crate::{
        shopcarts::handlers::get::ShopcartResponse,
        test_helpers::{make_item, make_shopcart, shopcarts_service},
    };

    use super::*;

    fn make_service(repo: MockShopcartsService) -> Service {
        shopcarts_service(repo, Router::with_path("shopcarts").post(handler))
    }

    #[tokio::test]
    async fn test_create_shopcart_success() -> TestResult {
        let cart = make_shopcart(1, 42);

        let mut repo = MockShopcartsService::new();

        repo.expect_create_shopcart()
            .once()
            .withf(|new| new.customer_id.into_i64() == 42 && new.items.is_empty())
            .return_once(move |_| Ok(cart));

        repo.expect_get_shopcart().never();
        repo.expect_delete_shopcart().never();

        let mut res = TestClient::post("http://example.com/shopcarts")
            .json(&json!({ "customer_id": 42 }))
            .send(&make_service(repo))
            .await;

        let body: ShopcartResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/shopcarts/1"));
        assert_eq!(body.id, 1);
        assert_eq!(body.customer_id, 42);
        assert!(body.items.is_empty(), "expected an empty item list");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_shopcart_with_items() -> TestResult {
        let mut cart = make_shopcart(1, 42);

        cart.items.push(make_item(1, 7, 2, 9.99));

        let mut repo = MockShopcartsService::new();

        repo.expect_create_shopcart()
            .once()
            .withf(|new| {
                new.customer_id.into_i64() == 42
                    && new.items.len() == 1
                    && new.items[0].product_id.into_i64() == 7
                    && new.items[0].quantity == 2
            })
            .return_once(move |_| Ok(cart));

        let mut res = TestClient::post("http://example.com/shopcarts")
            .json(&json!({
                "customer_id": 42,
                "items": [
                    { "shopcart_id": 1, "product_id": 7, "quantity": 2, "price": 9.99 },
                ],
            }))
            .send(&make_service(repo))
            .await;

        let body: ShopcartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.items.len(), 1);
        assert_eq!(body.items[0].quantity, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_shopcart_duplicate_customer_returns_409() -> TestResult {
        let mut repo = MockShopcartsService::new();

        repo.expect_create_shopcart()
            .once()
            .return_once(|_| Err(ShopcartsServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/shopcarts")
            .json(&json!({ "customer_id": 42 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_shopcart_missing_customer_id_returns_400() -> TestResult {
        let mut repo = MockShopcartsService::new();

        repo.expect_create_shopcart().never();

        let res = TestClient::post("http://example.com/shopcarts")
            .json(&json!({ "items": [] }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_shopcart_zero_customer_id_returns_400() -> TestResult {
        let mut repo = MockShopcartsService::new();

        repo.expect_create_shopcart().never();

        let res = TestClient::post("http://example.com/shopcarts")
            .json(&json!({ "customer_id": 0 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_shopcart_wrong_content_type_returns_415() -> TestResult {
        let mut repo = MockShopcartsService::new();

        repo.expect_create_shopcart().never();

        let service = shopcarts_service(
            repo,
            Router::with_path("shopcarts")
                .hoop(crate::media_type::handler)
                .post(handler),
        );

        let res = TestClient::post("http://example.com/shopcarts")
            .text("customer_id=42")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNSUPPORTED_MEDIA_TYPE));

        Ok(())
    }
}
