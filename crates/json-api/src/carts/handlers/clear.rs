//! Clear Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use smartcart::ids::OwnerId;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Cart Cleared Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartClearedResponse {
    /// Confirmation message
    pub message: String,
}

/// Clear Cart Handler
///
/// Resets the cart to empty. Idempotent: clearing an already-empty cart, or
/// one that was never created, succeeds the same way.
#[endpoint(
    tags("cart"),
    summary = "Clear Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart cleared"),
        (status_code = StatusCode::CONFLICT, description = "Concurrent cart writes"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    owner: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartClearedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .carts
        .clear_cart(OwnerId::from(owner.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartClearedResponse {
        message: "Cart cleared successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use smartcart_app::domain::carts::{CartsServiceError, MockCartsService, models::CartView};

    use crate::test_helpers::carts_service;

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart/{owner}").delete(handler))
    }

    #[tokio::test]
    async fn test_clear_cart_success() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_clear_cart()
            .once()
            .withf(|owner| owner.as_str() == "user-1")
            .return_once(|owner| Ok(CartView::empty(owner)));

        let mut res = TestClient::delete("http://example.com/cart/user-1")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CartClearedResponse = res.take_json().await?;

        assert_eq!(body.message, "Cart cleared successfully");

        Ok(())
    }

    #[tokio::test]
    async fn test_clear_missing_cart_is_still_a_success() -> TestResult {
        let mut carts = MockCartsService::new();

        // The service reports clear-of-nonexistent as a plain success.
        carts
            .expect_clear_cart()
            .once()
            .return_once(|owner| Ok(CartView::empty(owner)));

        let res = TestClient::delete("http://example.com/cart/never-shopped")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_clear_conflict_returns_409() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_clear_cart()
            .once()
            .return_once(|_| Err(CartsServiceError::Conflict));

        let res = TestClient::delete("http://example.com/cart/user-1")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
