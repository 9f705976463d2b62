//! Carts service errors.

use thiserror::Error;

use crate::domain::{carts::store::StoreError, catalog::errors::CatalogError};

#[derive(Debug, Error)]
pub enum CartsServiceError {
    /// The request carried a quantity outside the allowed range.
    #[error("invalid quantity")]
    InvalidQuantity,

    /// An add referenced a product the catalog does not know.
    #[error("product not found")]
    ProductNotFound,

    /// A mutation targeted an owner with no cart document.
    #[error("cart not found")]
    CartNotFound,

    /// A mutation targeted a product with no line item in the cart.
    #[error("item not found in cart")]
    ItemNotFound,

    /// Optimistic-concurrency retries were exhausted.
    #[error("conflicting writes to the cart")]
    Conflict,

    /// A dependency did not answer within the deadline.
    #[error("dependency unavailable")]
    Unavailable,

    #[error("cart storage error")]
    Store(#[from] StoreError),

    #[error("catalog lookup error")]
    Catalog(#[from] CatalogError),
}
