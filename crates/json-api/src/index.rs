//! Service Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Service index response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct IndexResponse {
    /// Service name
    pub name: String,

    /// Service version
    pub version: String,

    /// URL of the shopcarts collection
    pub shopcarts_url: String,
}

/// Service index handler
///
/// Returns service metadata and the shopcarts collection URL.
#[endpoint(tags("index"), summary = "Service index")]
pub(crate) async fn handler() -> Json<IndexResponse> {
    Json(IndexResponse {
        name: "Shopcarts REST API Service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        shopcarts_url: "/shopcarts".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_index_names_the_service() -> TestResult {
        let router = Router::new().get(handler);

        let response: IndexResponse = TestClient::get("http://example.com/")
            .send(&Service::new(router))
            .await
            .take_json()
            .await?;

        assert_eq!(response.name, "Shopcarts REST API Service");
        assert_eq!(response.shopcarts_url, "/shopcarts");

        Ok(())
    }
}
