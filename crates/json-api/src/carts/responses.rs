//! Cart Responses

use rust_decimal::{Decimal, prelude::ToPrimitive};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use smartcart::items::LineItem;
use smartcart_app::domain::carts::models::CartView;

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartResponse {
    /// The owner identifier keying the cart
    pub id: String,

    /// The line items, in insertion order
    pub items: Vec<CartItemResponse>,

    /// The cart total, Σ price × quantity over the items
    pub total: f64,

    /// When the cart was last written; absent for a cart never written to
    pub updated_at: Option<String>,
}

impl From<CartView> for CartResponse {
    fn from(view: CartView) -> Self {
        Self {
            id: view.cart.owner.to_string(),
            items: view
                .cart
                .items
                .into_iter()
                .map(CartItemResponse::from)
                .collect(),
            total: to_number(view.cart.total),
            updated_at: view.updated_at.as_ref().map(ToString::to_string),
        }
    }
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemResponse {
    /// The product referenced by this line item
    pub product_id: String,

    /// Product name snapshotted when the item was added
    pub name: String,

    /// Unit price snapshotted when the item was added
    pub price: f64,

    /// Image reference snapshotted when the item was added
    pub image_ref: String,

    /// Number of units
    pub quantity: u32,
}

impl From<LineItem> for CartItemResponse {
    fn from(item: LineItem) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            name: item.name,
            price: to_number(item.price),
            image_ref: item.image_ref,
            quantity: item.quantity,
        }
    }
}

/// Money is fixed-point internally; the wire format carries JSON numbers.
fn to_number(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
