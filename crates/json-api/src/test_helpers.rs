//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use smartcart::{
    cart::Cart,
    ids::{OwnerId, ProductId},
    items::{ItemSnapshot, LineItem},
    totals,
};
use smartcart_app::{
    context::AppContext,
    domain::carts::{MockCartsService, models::CartView, store::Version},
};

use crate::state::State;

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    let app = AppContext {
        carts: Arc::new(carts),
    };

    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

pub(crate) fn line_item(product: &str, price: Decimal, quantity: u32) -> LineItem {
    LineItem::from_snapshot(
        ProductId::from(product),
        ItemSnapshot::new(product, price, format!("{product}.png")),
        quantity,
    )
}

/// A cart view as the service would return it for a stored document.
pub(crate) fn stored_view(owner: &str, items: Vec<LineItem>, version: i64) -> CartView {
    let total = totals::cart_total(&items);

    CartView {
        cart: Cart {
            owner: OwnerId::from(owner),
            items,
            total,
        },
        updated_at: Some(Timestamp::UNIX_EPOCH),
        version: Some(Version::from_raw(version)),
    }
}
