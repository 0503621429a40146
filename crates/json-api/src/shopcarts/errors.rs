//! Errors

use salvo::http::StatusError;
use tracing::error;

use shopcarts_app::domain::shopcarts::ShopcartsServiceError;

pub(crate) fn into_status_error(error: ShopcartsServiceError) -> StatusError {
    match error {
        ShopcartsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Shopcart already exists for customer")
        }
        ShopcartsServiceError::InvalidReference
        | ShopcartsServiceError::MissingRequiredData
        | ShopcartsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid shopcart payload")
        }
        ShopcartsServiceError::Sql(source) => {
            error!("shopcart storage failure: {source}");

            StatusError::internal_server_error()
        }
        ShopcartsServiceError::NotFound => StatusError::not_found(),
    }
}
