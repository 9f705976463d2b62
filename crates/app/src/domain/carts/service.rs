//! Carts service.

use std::{future::Future, sync::Arc, time::Duration};

use async_trait::async_trait;
use mockall::automock;
use rand::Rng;
use tracing::warn;

use smartcart::{
    cart::Cart,
    ids::{OwnerId, ProductId},
    items::ItemSnapshot,
    mutation::{CartMutation, MutationError},
};

use crate::domain::{
    carts::{
        errors::CartsServiceError,
        models::CartView,
        store::{CartRecord, CartStore, CasOutcome},
    },
    catalog::CatalogLookup,
};

/// Tuning knobs for the optimistic write loop.
#[derive(Debug, Clone)]
pub struct CartsServiceConfig {
    /// Attempts at the read-modify-write cycle before giving up with
    /// [`CartsServiceError::Conflict`].
    pub write_attempts: u32,

    /// Base delay for the jittered exponential backoff between attempts.
    pub backoff_base: Duration,

    /// Deadline applied to every store and catalog call; expiry fails the
    /// operation with [`CartsServiceError::Unavailable`].
    pub dependency_timeout: Duration,
}

impl Default for CartsServiceConfig {
    fn default() -> Self {
        Self {
            write_attempts: 5,
            backoff_base: Duration::from_millis(20),
            dependency_timeout: Duration::from_secs(5),
        }
    }
}

/// Cart operations, keyed by owner.
#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Returns the stored cart, or the empty cart when none exists yet.
    ///
    /// Absence is the normal initial state; this never fails with not-found.
    async fn get_cart(&self, owner: OwnerId) -> Result<CartView, CartsServiceError>;

    /// Merges `quantity` units of a product into the cart.
    ///
    /// A product new to the cart gets a line item snapshotting the catalog's
    /// current name, price and image; an existing line item has its quantity
    /// increased. The stock flag is not consulted.
    async fn add_item(
        &self,
        owner: OwnerId,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<CartView, CartsServiceError>;

    /// Overwrites a line item's quantity; zero removes the line item.
    async fn set_item_quantity(
        &self,
        owner: OwnerId,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<CartView, CartsServiceError>;

    /// Deletes a line item.
    async fn remove_item(
        &self,
        owner: OwnerId,
        product_id: ProductId,
    ) -> Result<CartView, CartsServiceError>;

    /// Resets the cart to empty.
    ///
    /// Idempotent; clearing an owner that never had a cart is a no-op
    /// success.
    async fn clear_cart(&self, owner: OwnerId) -> Result<CartView, CartsServiceError>;
}

/// [`CartsService`] over a [`CartStore`] and a [`CatalogLookup`].
///
/// Stateless across requests: concurrency correctness lives entirely in the
/// store's conditional writes. Every mutation re-reads the document, applies
/// the pure core mutation and attempts a version-gated write, retrying the
/// whole cycle on conflict.
pub struct StoreCartsService {
    store: Arc<dyn CartStore>,
    catalog: Arc<dyn CatalogLookup>,
    config: CartsServiceConfig,
}

impl StoreCartsService {
    #[must_use]
    pub fn new(
        store: Arc<dyn CartStore>,
        catalog: Arc<dyn CatalogLookup>,
        config: CartsServiceConfig,
    ) -> Self {
        Self {
            store,
            catalog,
            config,
        }
    }

    async fn read(&self, owner: &OwnerId) -> Result<Option<CartRecord>, CartsServiceError> {
        with_deadline(self.config.dependency_timeout, self.store.get(owner)).await
    }

    async fn mutate(
        &self,
        owner: &OwnerId,
        mutation: &CartMutation,
    ) -> Result<CartView, CartsServiceError> {
        for attempt in 1..=self.config.write_attempts {
            if attempt > 1 {
                tokio::time::sleep(backoff_delay(attempt, self.config.backoff_base)).await;
            }

            let current = self.read(owner).await?;

            let (cart, expected) = match &current {
                Some(record) => (record.cart.clone(), Some(record.version)),
                None => match mutation {
                    CartMutation::Add { .. } => (Cart::empty(owner.clone()), None),
                    // Clearing a cart that was never created needs no write;
                    // a later read still returns the empty cart.
                    CartMutation::Clear => return Ok(CartView::empty(owner.clone())),
                    CartMutation::SetQuantity { .. } | CartMutation::Remove { .. } => {
                        return Err(CartsServiceError::CartNotFound);
                    }
                },
            };

            let next = cart.apply(mutation).map_err(from_mutation_error)?;

            let written = with_deadline(
                self.config.dependency_timeout,
                self.store.compare_and_set(owner, expected, &next),
            )
            .await?;

            match written {
                CasOutcome::Committed(record) => return Ok(record.into()),
                CasOutcome::Conflict => {
                    warn!(owner = %owner, attempt, "conditional cart write conflicted, retrying");
                }
            }
        }

        Err(CartsServiceError::Conflict)
    }
}

#[async_trait]
impl CartsService for StoreCartsService {
    async fn get_cart(&self, owner: OwnerId) -> Result<CartView, CartsServiceError> {
        let record = self.read(&owner).await?;

        Ok(record.map_or_else(|| CartView::empty(owner), Into::into))
    }

    async fn add_item(
        &self,
        owner: OwnerId,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<CartView, CartsServiceError> {
        let quantity = checked_quantity(quantity, 1)?;

        // The snapshot is constructed once, before the write loop; retries
        // reuse it rather than re-reading the catalog.
        let product = with_deadline(
            self.config.dependency_timeout,
            self.catalog.get_product(&product_id),
        )
        .await?
        .ok_or(CartsServiceError::ProductNotFound)?;

        let mutation = CartMutation::Add {
            product_id,
            snapshot: ItemSnapshot::new(product.name, product.price, product.image_url),
            quantity,
        };

        self.mutate(&owner, &mutation).await
    }

    async fn set_item_quantity(
        &self,
        owner: OwnerId,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<CartView, CartsServiceError> {
        let quantity = checked_quantity(quantity, 0)?;

        self.mutate(
            &owner,
            &CartMutation::SetQuantity {
                product_id,
                quantity,
            },
        )
        .await
    }

    async fn remove_item(
        &self,
        owner: OwnerId,
        product_id: ProductId,
    ) -> Result<CartView, CartsServiceError> {
        self.mutate(&owner, &CartMutation::Remove { product_id }).await
    }

    async fn clear_cart(&self, owner: OwnerId) -> Result<CartView, CartsServiceError> {
        self.mutate(&owner, &CartMutation::Clear).await
    }
}

/// Validates a wire quantity into the stored representation.
fn checked_quantity(quantity: i64, min: i64) -> Result<u32, CartsServiceError> {
    if quantity < min {
        return Err(CartsServiceError::InvalidQuantity);
    }

    u32::try_from(quantity).map_err(|_| CartsServiceError::InvalidQuantity)
}

fn from_mutation_error(error: MutationError) -> CartsServiceError {
    match error {
        MutationError::InvalidQuantity => CartsServiceError::InvalidQuantity,
        MutationError::ItemNotFound(_) => CartsServiceError::ItemNotFound,
    }
}

/// Exponential backoff with full jitter over one base step.
fn backoff_delay(attempt: u32, base: Duration) -> Duration {
    let shift = attempt.saturating_sub(2).min(4);
    let step = base.saturating_mul(1_u32 << shift);
    let jitter = rand::thread_rng().gen_range(Duration::ZERO..=base);

    step.saturating_add(jitter)
}

async fn with_deadline<T, E>(
    deadline: Duration,
    call: impl Future<Output = Result<T, E>> + Send,
) -> Result<T, CartsServiceError>
where
    CartsServiceError: From<E>,
{
    match tokio::time::timeout(deadline, call).await {
        Ok(result) => result.map_err(CartsServiceError::from),
        Err(_elapsed) => Err(CartsServiceError::Unavailable),
    }
}
