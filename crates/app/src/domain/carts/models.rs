//! Cart Models

use jiff::Timestamp;

use smartcart::{cart::Cart, ids::OwnerId};

use crate::domain::carts::store::{CartRecord, Version};

/// A cart as returned by the service: the document plus store metadata.
///
/// An owner with no document yet gets a synthetic empty cart, which carries
/// no metadata. Absence is the normal initial state, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    /// The cart document.
    pub cart: Cart,

    /// When the document was last committed; `None` for a synthetic empty
    /// cart.
    pub updated_at: Option<Timestamp>,

    /// Version the document was committed at; `None` for a synthetic empty
    /// cart.
    pub version: Option<Version>,
}

impl CartView {
    /// The empty cart for an owner that has no document yet.
    #[must_use]
    pub fn empty(owner: OwnerId) -> Self {
        Self {
            cart: Cart::empty(owner),
            updated_at: None,
            version: None,
        }
    }

    /// Whether the write that produced this view created the document.
    #[must_use]
    pub fn newly_created(&self) -> bool {
        self.version == Some(Version::FIRST)
    }
}

impl From<CartRecord> for CartView {
    fn from(record: CartRecord) -> Self {
        Self {
            cart: record.cart,
            updated_at: Some(record.updated_at),
            version: Some(record.version),
        }
    }
}
