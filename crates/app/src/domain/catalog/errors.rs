//! Catalog lookup errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog storage error")]
    Sql(#[from] sqlx::Error),
}
