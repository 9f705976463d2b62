//! Delete Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use smartcart::ids::{OwnerId, ProductId};

use crate::{
    carts::{errors::into_status_error, responses::CartResponse},
    extensions::*,
    state::State,
};

/// Delete Cart Item Handler
///
/// Removes a line item and returns the updated cart.
#[endpoint(
    tags("cart"),
    summary = "Remove Item from Cart",
    responses(
        (status_code = StatusCode::OK, description = "Updated cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or item not found"),
        (status_code = StatusCode::CONFLICT, description = "Concurrent cart writes"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    owner: PathParam<String>,
    product: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let view = state
        .app
        .carts
        .remove_item(
            OwnerId::from(owner.into_inner()),
            ProductId::from(product.into_inner()),
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(view.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use smartcart_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::test_helpers::{carts_service, line_item, stored_view};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(
            carts,
            Router::with_path("cart/{owner}/items/{product}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_remove_item_returns_the_updated_cart() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_item()
            .once()
            .withf(|owner, product| owner.as_str() == "user-1" && product.as_str() == "p1")
            .return_once(|_, _| {
                Ok(stored_view(
                    "user-1",
                    vec![line_item("p2", Decimal::new(4_00, 2), 1)],
                    5,
                ))
            });

        let mut res = TestClient::delete("http://example.com/cart/user-1/items/p1")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CartResponse = res.take_json().await?;

        assert_eq!(body.items.len(), 1);
        assert_eq!(body.items.first().map(|i| i.product_id.as_str()), Some("p2"));
        assert_eq!(body.total, 4.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_from_missing_cart_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::CartNotFound));

        let res = TestClient::delete("http://example.com/cart/user-1/items/p1")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_missing_item_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::ItemNotFound));

        let res = TestClient::delete("http://example.com/cart/user-1/items/ghost")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
