//! Cart Mutations

use thiserror::Error;

use crate::{
    ids::ProductId,
    items::{ItemSnapshot, LineItem},
};

/// A single mutation applied to a cart's line items.
#[derive(Debug, Clone, PartialEq)]
pub enum CartMutation {
    /// Merge `quantity` units of a product into the cart.
    ///
    /// An existing line item has its quantity increased; otherwise a new line
    /// item is appended carrying the catalog snapshot.
    Add {
        /// Product being added.
        product_id: ProductId,

        /// Catalog fields captured before the mutation was built.
        snapshot: ItemSnapshot,

        /// Units to merge in; must be strictly positive.
        quantity: u32,
    },

    /// Overwrite a line item's quantity; zero removes the line item.
    SetQuantity {
        /// Product whose line item is adjusted.
        product_id: ProductId,

        /// Absolute quantity to store.
        quantity: u32,
    },

    /// Delete a line item.
    Remove {
        /// Product whose line item is deleted.
        product_id: ProductId,
    },

    /// Reset the cart to empty.
    Clear,
}

/// Errors from applying a mutation to a cart.
#[derive(Debug, Error, PartialEq)]
pub enum MutationError {
    /// An add must carry a strictly positive quantity.
    #[error("quantity must be a positive integer")]
    InvalidQuantity,

    /// A set or remove targeted a product with no line item.
    #[error("no line item for product {0}")]
    ItemNotFound(ProductId),
}

/// Applies a mutation to an ordered sequence of line items.
///
/// Pure function, factored away from persistence so it can be unit-tested
/// without a store. It enforces the line-item invariants: at most one entry
/// per product, every stored quantity strictly positive (zero means absent),
/// insertion order preserved across updates.
///
/// # Errors
///
/// - [`MutationError::InvalidQuantity`] for an add of zero units.
/// - [`MutationError::ItemNotFound`] when a set or remove targets a product
///   that has no line item.
pub fn reconcile(
    items: &[LineItem],
    mutation: &CartMutation,
) -> Result<Vec<LineItem>, MutationError> {
    match mutation {
        CartMutation::Add {
            product_id,
            snapshot,
            quantity,
        } => {
            if *quantity == 0 {
                return Err(MutationError::InvalidQuantity);
            }

            let mut next = items.to_vec();

            if let Some(existing) = next.iter_mut().find(|item| item.product_id == *product_id) {
                existing.quantity = existing.quantity.saturating_add(*quantity);
            } else {
                next.push(LineItem::from_snapshot(
                    product_id.clone(),
                    snapshot.clone(),
                    *quantity,
                ));
            }

            Ok(next)
        }
        CartMutation::SetQuantity {
            product_id,
            quantity,
        } => {
            let position = position_of(items, product_id)?;
            let mut next = items.to_vec();

            if *quantity == 0 {
                next.remove(position);
            } else if let Some(item) = next.get_mut(position) {
                item.quantity = *quantity;
            }

            Ok(next)
        }
        CartMutation::Remove { product_id } => {
            let position = position_of(items, product_id)?;
            let mut next = items.to_vec();

            next.remove(position);

            Ok(next)
        }
        CartMutation::Clear => Ok(Vec::new()),
    }
}

fn position_of(items: &[LineItem], product_id: &ProductId) -> Result<usize, MutationError> {
    items
        .iter()
        .position(|item| item.product_id == *product_id)
        .ok_or_else(|| MutationError::ItemNotFound(product_id.clone()))
}
