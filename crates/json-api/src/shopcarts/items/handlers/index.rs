//! Cart Item Index Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};

use crate::{
    extensions::*,
    shopcarts::{errors::into_status_error, handlers::get::CartItemResponse},
    state::State,
};

/// Cart Item Index Handler
///
/// Returns the items in a cart. With a `product_id` filter the result is the
/// matching item alone, and no match is a 404.
#[endpoint(
    tags("items"),
    summary = "List Cart Items",
    responses(
        (status_code = StatusCode::OK, description = "Cart item list"),
        (status_code = StatusCode::NOT_FOUND, description = "Shopcart or filtered item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    shopcart: PathParam<i64>,
    product_id: QueryParam<i64, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<CartItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let shopcart = shopcart.into_inner();

    let items = if let Some(product) = product_id.into_inner() {
        let item = state
            .app
            .shopcarts
            .get_item(shopcart.into(), product.into())
            .await
            .map_err(into_status_error)?;

        vec![item]
    } else {
        state
            .app
            .shopcarts
            .list_items(shopcart.into())
            .await
            .map_err(into_status_error)?
    };

    Ok(Json(items.into_iter().map(CartItemResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopcarts_app::domain::shopcarts::{MockShopcartsService, ShopcartsServiceError};

    use crate::test_helpers::{make_item, shopcarts_service};

    use super::*;

    fn make_service(repo: MockShopcartsService) -> Service {
        shopcarts_service(
            repo,
            Router::with_path("shopcarts/{shopcart}/items").get(handler),
        )
    }

    #[tokio::test]
    async fn test_item_index_returns_cart_items() -> TestResult {
        let mut repo = MockShopcartsService::new();

        repo.expect_list_items()
            .once()
            .withf(|shopcart| shopcart.into_i64() == 1)
            .return_once(|_| Ok(vec![make_item(1, 7, 1, 9.99), make_item(1, 8, 2, 1.25)]));

        repo.expect_get_item().never();

        let body: Vec<CartItemResponse> = TestClient::get("http://example.com/shopcarts/1/items")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert_eq!(body.len(), 2);
        assert_eq!(body[0].product_id, 7);
        assert_eq!(body[1].product_id, 8);

        Ok(())
    }

    #[tokio::test]
    async fn test_item_index_missing_cart_returns_404() -> TestResult {
        let mut repo = MockShopcartsService::new();

        repo.expect_list_items()
            .once()
            .return_once(|_| Err(ShopcartsServiceError::NotFound));

        let res = TestClient::get("http://example.com/shopcarts/999/items")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_item_index_product_filter_returns_single_item() -> TestResult {
        let mut repo = MockShopcartsService::new();

        repo.expect_get_item()
            .once()
            .withf(|shopcart, product| shopcart.into_i64() == 1 && product.into_i64() == 7)
            .return_once(|_, _| Ok(make_item(1, 7, 1, 9.99)));

        repo.expect_list_items().never();

        let body: Vec<CartItemResponse> =
            TestClient::get("http://example.com/shopcarts/1/items?product_id=7")
                .send(&make_service(repo))
                .await
                .take_json()
                .await?;

        assert_eq!(body.len(), 1);
        assert_eq!(body[0].product_id, 7);

        Ok(())
    }

    #[tokio::test]
    async fn test_item_index_product_filter_without_match_returns_404() -> TestResult {
        let mut repo = MockShopcartsService::new();

        repo.expect_get_item()
            .once()
            .return_once(|_, _| Err(ShopcartsServiceError::NotFound));

        repo.expect_list_items().never();

        let res = TestClient::get("http://example.com/shopcarts/1/items?product_id=86")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
