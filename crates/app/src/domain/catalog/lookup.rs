//! Catalog Lookup

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use smartcart::ids::ProductId;

use crate::domain::catalog::{errors::CatalogError, models::Product};

const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");

/// Read-only view of the product catalog.
///
/// The catalog is an external collaborator; the cart service only ever
/// resolves single products by id, to snapshot their fields onto a new line
/// item.
#[automock]
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    /// Resolves a product id to its catalog entry, if it exists.
    async fn get_product(&self, product_id: &ProductId) -> Result<Option<Product>, CatalogError>;
}

/// [`CatalogLookup`] against the catalog's Postgres `products` table.
#[derive(Debug, Clone)]
pub struct PgCatalogLookup {
    pool: PgPool,
}

impl PgCatalogLookup {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogLookup for PgCatalogLookup {
    async fn get_product(&self, product_id: &ProductId) -> Result<Option<Product>, CatalogError> {
        let product = query_as::<Postgres, Product>(GET_PRODUCT_SQL)
            .bind(product_id.as_str())
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            image_url: row.try_get("image_url")?,
            in_stock: row.try_get("in_stock")?,
        })
    }
}
