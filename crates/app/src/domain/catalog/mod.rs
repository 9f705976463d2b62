//! Catalog

pub mod cache;
pub mod errors;
pub mod lookup;
pub mod memory;
pub mod models;

pub use cache::CachedCatalog;
pub use errors::CatalogError;
pub use lookup::*;
pub use memory::InMemoryCatalog;
pub use models::Product;
