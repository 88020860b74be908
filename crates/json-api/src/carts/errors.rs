//! Errors

use salvo::http::StatusError;
use tracing::error;

use solarcart_app::domain::carts::CartsServiceError;

/// Map a cart store failure to an HTTP error; `brief` is the route's storage-fault message.
pub(crate) fn into_status_error(error: CartsServiceError, brief: &str) -> StatusError {
    match error {
        CartsServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Missing required fields")
        }
        CartsServiceError::InvalidData => StatusError::bad_request().brief("Invalid cart item"),
        CartsServiceError::InvalidQuantity(source) => {
            tracing::debug!("rejected quantity: {source}");

            StatusError::bad_request().brief("Invalid quantity")
        }
        CartsServiceError::Sql(source) => {
            error!("{brief}: {source}");

            StatusError::internal_server_error().brief(brief)
        }
    }
}
