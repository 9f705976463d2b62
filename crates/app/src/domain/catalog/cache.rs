//! Catalog cache

use std::time::{Duration, Instant};

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tokio::sync::Mutex;

use smartcart::ids::ProductId;

use crate::domain::catalog::{errors::CatalogError, lookup::CatalogLookup, models::Product};

#[derive(Debug, Clone)]
struct CacheEntry {
    fetched_at: Instant,
    product: Option<Product>,
}

/// Decorator memoising catalog lookups under a short TTL.
///
/// `AddItem` resolves the catalog on every invocation; the capped TTL keeps
/// that from hammering the catalog while bounding how stale a snapshot price
/// can be. Misses (unknown products) are cached too.
#[derive(Debug)]
pub struct CachedCatalog<L> {
    inner: L,
    ttl: Duration,
    capacity: usize,
    entries: Mutex<FxHashMap<ProductId, CacheEntry>>,
}

impl<L> CachedCatalog<L> {
    #[must_use]
    pub fn new(inner: L, ttl: Duration, capacity: usize) -> Self {
        Self {
            inner,
            ttl,
            capacity,
            entries: Mutex::new(FxHashMap::default()),
        }
    }
}

#[async_trait]
impl<L: CatalogLookup> CatalogLookup for CachedCatalog<L> {
    async fn get_product(&self, product_id: &ProductId) -> Result<Option<Product>, CatalogError> {
        {
            let entries = self.entries.lock().await;

            if let Some(entry) = entries.get(product_id) {
                if entry.fetched_at.elapsed() < self.ttl {
                    return Ok(entry.product.clone());
                }
            }
        }

        let product = self.inner.get_product(product_id).await?;

        let mut entries = self.entries.lock().await;

        if entries.len() >= self.capacity {
            let ttl = self.ttl;

            entries.retain(|_, entry| entry.fetched_at.elapsed() < ttl);
        }

        if entries.len() < self.capacity {
            entries.insert(
                product_id.clone(),
                CacheEntry {
                    fetched_at: Instant::now(),
                    product: product.clone(),
                },
            );
        }

        Ok(product)
    }
}
