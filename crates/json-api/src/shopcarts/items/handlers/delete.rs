//! Delete Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, shopcarts::errors::into_status_error, state::State};

/// Delete Cart Item Handler
///
/// Idempotent: deleting an absent item still returns 204.
#[endpoint(
    tags("items"),
    summary = "Delete Cart Item",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Cart item deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    shopcart: PathParam<i64>,
    product: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .shopcarts
        .remove_item(shopcart.into_inner().into(), product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use shopcarts_app::domain::shopcarts::MockShopcartsService;

    use crate::test_helpers::shopcarts_service;

    use super::*;

    fn make_service(repo: MockShopcartsService) -> Service {
        shopcarts_service(
            repo,
            Router::with_path("shopcarts/{shopcart}/items/{product}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_item_returns_204() -> TestResult {
        let mut repo = MockShopcartsService::new();

        repo.expect_remove_item()
            .once()
            .withf(|shopcart, product| shopcart.into_i64() == 1 && product.into_i64() == 7)
            .return_once(|_, _| Ok(()));

        repo.expect_remove_items().never();

        let res = TestClient::delete("http://example.com/shopcarts/1/items/7")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_absent_item_still_returns_204() -> TestResult {
        let mut repo = MockShopcartsService::new();

        repo.expect_remove_item().once().return_once(|_, _| Ok(()));

        let res = TestClient::delete("http://example.com/shopcarts/1/items/86")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }
}
