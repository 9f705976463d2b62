//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
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

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddCartItemRequest {
    /// Product to add
    pub product_id: String,

    /// Units to merge into the cart; must be a positive integer
    pub quantity: i64,
}

/// Add Cart Item Handler
///
/// Merges units of a product into the cart. A product already in the cart
/// has its quantity increased; a new product is appended with a snapshot of
/// the catalog's current name, price and image.
#[endpoint(
    tags("cart"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::OK, description = "Updated cart"),
        (status_code = StatusCode::CREATED, description = "Cart created with its first item"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid quantity"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Concurrent cart writes"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    owner: PathParam<String>,
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let owner = OwnerId::from(owner.into_inner());
    let request = json.into_inner();

    let view = state
        .app
        .carts
        .add_item(
            owner.clone(),
            ProductId::from(request.product_id),
            request.quantity,
        )
        .await
        .map_err(into_status_error)?;

    if view.newly_created() {
        res.add_header(LOCATION, format!("/cart/{owner}"), true)
            .or_500("failed to set location header")?
            .status_code(StatusCode::CREATED);
    }

    Ok(Json(view.into()))
}
