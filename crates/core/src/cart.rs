//! Carts

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    ids::{OwnerId, ProductId},
    items::LineItem,
    mutation::{self, CartMutation, MutationError},
    totals,
};

/// A user's cart: the single entity owned by the cart service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    /// Identifier of the owning user; never changes after creation.
    pub owner: OwnerId,

    /// Line items in insertion order, preserved across updates.
    pub items: Vec<LineItem>,

    /// Derived total, recomputed on every mutation and never patched
    /// incrementally.
    pub total: Decimal,
}

impl Cart {
    /// Creates the empty cart for an owner.
    #[must_use]
    pub fn empty(owner: OwnerId) -> Self {
        Self {
            owner,
            items: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    /// Applies a single mutation and returns the new, fully-consistent cart.
    ///
    /// Each call is a pure function of (current cart, mutation) → new cart;
    /// ordering between concurrent callers is decided by the store's
    /// conditional write, not here.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::InvalidQuantity`] for an add of zero units
    /// and [`MutationError::ItemNotFound`] when a set or remove targets a
    /// product with no line item.
    pub fn apply(&self, mutation: &CartMutation) -> Result<Self, MutationError> {
        let items = mutation::reconcile(&self.items, mutation)?;
        let total = totals::cart_total(&items);

        Ok(Self {
            owner: self.owner.clone(),
            items,
            total,
        })
    }

    /// Returns the line item for a product, if present.
    #[must_use]
    pub fn item(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items
            .iter()
            .find(|item| item.product_id == *product_id)
    }

    /// Whether the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
