//! In-memory catalog

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tokio::sync::Mutex;

use smartcart::ids::ProductId;

use crate::domain::catalog::{errors::CatalogError, lookup::CatalogLookup, models::Product};

/// Process-local [`CatalogLookup`] for tests and local development.
///
/// Entries can be replaced at any time, which is how tests exercise the
/// "snapshot survives a catalog price change" behaviour.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: Mutex<FxHashMap<ProductId, Product>>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a product.
    pub async fn insert(&self, product_id: ProductId, product: Product) {
        self.products.lock().await.insert(product_id, product);
    }
}

#[async_trait]
impl CatalogLookup for InMemoryCatalog {
    async fn get_product(&self, product_id: &ProductId) -> Result<Option<Product>, CatalogError> {
        Ok(self.products.lock().await.get(product_id).cloned())
    }
}
