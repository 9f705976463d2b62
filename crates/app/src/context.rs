//! App Context

use std::{sync::Arc, time::Duration};

use thiserror::Error;

use crate::{
    database,
    domain::{
        carts::{CartsService, CartsServiceConfig, service::StoreCartsService, store::PgCartStore},
        catalog::{CachedCatalog, PgCatalogLookup},
    },
};

/// Catalog entries are memoised briefly; `AddItem` resolves the catalog on
/// every invocation.
const CATALOG_TTL: Duration = Duration::from_secs(30);
const CATALOG_CAPACITY: usize = 1_024;

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub carts: Arc<dyn CartsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        config: CartsServiceConfig,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let store = Arc::new(PgCartStore::new(pool.clone()));
        let catalog = Arc::new(CachedCatalog::new(
            PgCatalogLookup::new(pool),
            CATALOG_TTL,
            CATALOG_CAPACITY,
        ));

        Ok(Self {
            carts: Arc::new(StoreCartsService::new(store, catalog, config)),
        })
    }
}
