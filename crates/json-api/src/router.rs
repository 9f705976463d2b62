//! App Router

use salvo::Router;

use crate::carts;

pub(crate) fn app_router() -> Router {
    Router::with_path("cart/{owner}")
        .get(carts::handlers::get::handler)
        .delete(carts::handlers::clear::handler)
        .push(
            Router::with_path("items")
                .post(carts::items::handlers::create::handler)
                .push(
                    Router::with_path("{product}")
                        .put(carts::items::handlers::update::handler)
                        .delete(carts::items::handlers::delete::handler),
                ),
        )
}
