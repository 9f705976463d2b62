//! Postgres cart store

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{PgPool, Row, postgres::PgRow, query, types::Json};

use smartcart::{cart::Cart, ids::OwnerId};

use super::{CartRecord, CartStore, CasOutcome, StoreError, Version};

const GET_CART_SQL: &str = include_str!("sql/get_cart.sql");
const INSERT_CART_SQL: &str = include_str!("sql/insert_cart.sql");
const UPDATE_CART_SQL: &str = include_str!("sql/update_cart.sql");

/// [`CartStore`] backed by a Postgres `carts` table: one JSONB document per
/// owner, with a `version` column gating conditional writes.
///
/// Creation races resolve through `ON CONFLICT DO NOTHING`, updates through
/// `WHERE version = $expected`; either way a missing `RETURNING` row means
/// another writer won and nothing was persisted.
#[derive(Debug, Clone)]
pub struct PgCartStore {
    pool: PgPool,
}

impl PgCartStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartStore for PgCartStore {
    async fn get(&self, owner: &OwnerId) -> Result<Option<CartRecord>, StoreError> {
        let row = query(GET_CART_SQL)
            .bind(owner.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref()
            .map(record_from_row)
            .transpose()
            .map_err(StoreError::Sql)
    }

    async fn compare_and_set(
        &self,
        owner: &OwnerId,
        expected: Option<Version>,
        cart: &Cart,
    ) -> Result<CasOutcome, StoreError> {
        let row = match expected {
            None => {
                query(INSERT_CART_SQL)
                    .bind(owner.as_str())
                    .bind(Json(cart))
                    .fetch_optional(&self.pool)
                    .await?
            }
            Some(version) => {
                query(UPDATE_CART_SQL)
                    .bind(owner.as_str())
                    .bind(Json(cart))
                    .bind(version.into_raw())
                    .fetch_optional(&self.pool)
                    .await?
            }
        };

        let Some(row) = row else {
            return Ok(CasOutcome::Conflict);
        };

        Ok(CasOutcome::Committed(CartRecord {
            cart: cart.clone(),
            version: Version::from_raw(row.try_get("version")?),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        }))
    }
}

fn record_from_row(row: &PgRow) -> Result<CartRecord, sqlx::Error> {
    let Json(cart) = row.try_get::<Json<Cart>, _>("document")?;

    Ok(CartRecord {
        cart,
        version: Version::from_raw(row.try_get("version")?),
        updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
    })
}
