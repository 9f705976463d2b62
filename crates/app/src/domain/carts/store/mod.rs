//! Cart Store

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use thiserror::Error;

use smartcart::{cart::Cart, ids::OwnerId};

mod memory;
mod postgres;

pub use memory::InMemoryCartStore;
pub use postgres::PgCartStore;

/// Monotonic document version gating conditional writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version(i64);

impl Version {
    /// Version a document receives on its first write.
    pub const FIRST: Version = Version(1);

    /// Wraps a raw version number read from a store.
    #[must_use]
    pub const fn from_raw(version: i64) -> Self {
        Self(version)
    }

    /// The raw version number, as persisted.
    #[must_use]
    pub const fn into_raw(self) -> i64 {
        self.0
    }

    /// The version the document will carry after one more write.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// A stored cart together with its store metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct CartRecord {
    /// The cart document.
    pub cart: Cart,

    /// Version the document was committed at.
    pub version: Version,

    /// Stamped by the store at the moment the write committed, never
    /// supplied by the caller.
    pub updated_at: Timestamp,
}

/// Outcome of a conditional write.
#[derive(Debug, Clone, PartialEq)]
pub enum CasOutcome {
    /// The write landed; the record is the committed state.
    Committed(CartRecord),

    /// Another writer updated the document first; nothing was persisted.
    Conflict,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}

/// Keyed document store holding at most one cart per owner.
///
/// Absence of a document is a normal state for `get`, not an error. A write
/// either commits whole or not at all; no intermediate state is observable
/// by other readers. Multi-document transactions are not required.
#[automock]
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Fetches the stored cart for an owner, if any.
    async fn get(&self, owner: &OwnerId) -> Result<Option<CartRecord>, StoreError>;

    /// Writes `cart` if the stored document is still at `expected`.
    ///
    /// `None` means the document must not exist yet (carts are created
    /// lazily). The store stamps `updated_at` as part of the commit.
    async fn compare_and_set(
        &self,
        owner: &OwnerId,
        expected: Option<Version>,
        cart: &Cart,
    ) -> Result<CasOutcome, StoreError>;
}
