//! Catalog Models

use rust_decimal::Decimal;

/// The catalog fields the cart service needs for a product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Display name.
    pub name: String,

    /// Current unit price.
    pub price: Decimal,

    /// Reference to the product image.
    pub image_url: String,

    /// Stock flag, carried for callers; the cart core never gates on it.
    pub in_stock: bool,
}
