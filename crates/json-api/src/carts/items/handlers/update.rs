//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use smartcart::ids::{OwnerId, ProductId};

use crate::{
    carts::{errors::into_status_error, responses::CartResponse},
    extensions::*,
    state::State,
};

/// Update Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    /// Absolute quantity to store; zero removes the item
    pub quantity: i64,
}

/// Update Cart Item Handler
///
/// Overwrites a line item's quantity. Unlike adding, this is an absolute
/// set; a quantity of zero removes the line item.
#[endpoint(
    tags("cart"),
    summary = "Set Cart Item Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Updated cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid quantity"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or item not found"),
        (status_code = StatusCode::CONFLICT, description = "Concurrent cart writes"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    owner: PathParam<String>,
    product: PathParam<String>,
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let view = state
        .app
        .carts
        .set_item_quantity(
            OwnerId::from(owner.into_inner()),
            ProductId::from(product.into_inner()),
            json.into_inner().quantity,
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(view.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use smartcart_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::test_helpers::{carts_service, line_item, stored_view};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(
            carts,
            Router::with_path("cart/{owner}/items/{product}").put(handler),
        )
    }

    #[tokio::test]
    async fn test_set_quantity_returns_the_updated_cart() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_set_item_quantity()
            .once()
            .withf(|owner, product, quantity| {
                owner.as_str() == "user-1" && product.as_str() == "p1" && *quantity == 2
            })
            .return_once(|_, _, _| {
                Ok(stored_view(
                    "user-1",
                    vec![line_item("p1", Decimal::new(9_99, 2), 2)],
                    3,
                ))
            });

        let mut res = TestClient::put("http://example.com/cart/user-1/items/p1")
            .json(&json!({ "quantity": 2 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CartResponse = res.take_json().await?;

        assert_eq!(body.items.first().map(|i| i.quantity), Some(2));
        assert_eq!(body.total, 19.98);

        Ok(())
    }

    #[tokio::test]
    async fn test_setting_zero_returns_the_emptied_cart() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_set_item_quantity()
            .once()
            .withf(|_, _, quantity| *quantity == 0)
            .return_once(|_, _, _| Ok(stored_view("user-1", Vec::new(), 4)));

        let mut res = TestClient::put("http://example.com/cart/user-1/items/p1")
            .json(&json!({ "quantity": 0 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CartResponse = res.take_json().await?;

        assert!(body.items.is_empty());
        assert_eq!(body.total, 0.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_negative_quantity_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_set_item_quantity()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::InvalidQuantity));

        let res = TestClient::put("http://example.com/cart/user-1/items/p1")
            .json(&json!({ "quantity": -1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_cart_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_set_item_quantity()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::CartNotFound));

        let res = TestClient::put("http://example.com/cart/user-1/items/p1")
            .json(&json!({ "quantity": 1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_item_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_set_item_quantity()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::ItemNotFound));

        let res = TestClient::put("http://example.com/cart/user-1/items/ghost")
            .json(&json!({ "quantity": 1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
