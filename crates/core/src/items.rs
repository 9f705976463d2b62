//! Line Items

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ids::ProductId, totals::MONEY_SCALE};

/// Catalog fields copied onto a line item at the moment it is added.
///
/// The copy is deliberate denormalisation: a later catalog price change does
/// not rewrite a stored line item, so cart totals stay explainable without a
/// catalog join on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSnapshot {
    /// Display name of the product.
    pub name: String,

    /// Unit price, normalised to two decimal places.
    pub price: Decimal,

    /// Reference to the product image.
    pub image_ref: String,
}

impl ItemSnapshot {
    /// Creates a snapshot, normalising the price to the cart money scale.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Decimal, image_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.round_dp(MONEY_SCALE),
            image_ref: image_ref.into(),
        }
    }
}

/// One product entry in a cart, with its own quantity and price snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product referenced by this line; unique within a cart.
    pub product_id: ProductId,

    /// Snapshotted product name.
    pub name: String,

    /// Snapshotted unit price.
    pub price: Decimal,

    /// Snapshotted image reference.
    pub image_ref: String,

    /// Number of units; always strictly positive when stored.
    pub quantity: u32,
}

impl LineItem {
    /// Creates a line item from a catalog snapshot.
    #[must_use]
    pub fn from_snapshot(product_id: ProductId, snapshot: ItemSnapshot, quantity: u32) -> Self {
        Self {
            product_id,
            name: snapshot.name,
            price: snapshot.price,
            image_ref: snapshot.image_ref,
            quantity,
        }
    }

    /// The price contribution of this line, `price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}
