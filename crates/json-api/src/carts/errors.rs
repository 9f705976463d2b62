//! Errors

use salvo::http::StatusError;
use tracing::error;

use smartcart_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::InvalidQuantity => {
            StatusError::bad_request().brief("Valid quantity is required")
        }
        CartsServiceError::ProductNotFound => StatusError::not_found().brief("Product not found"),
        CartsServiceError::CartNotFound => StatusError::not_found().brief("Cart not found"),
        CartsServiceError::ItemNotFound => {
            StatusError::not_found().brief("Item not found in cart")
        }
        CartsServiceError::Conflict => {
            StatusError::conflict().brief("Cart was modified concurrently")
        }
        CartsServiceError::Unavailable => {
            StatusError::service_unavailable().brief("Cart dependency did not respond in time")
        }
        CartsServiceError::Store(source) => {
            error!("cart store failure: {source}");

            StatusError::internal_server_error()
        }
        CartsServiceError::Catalog(source) => {
            error!("catalog lookup failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
