//! Router assembly.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::listing))
        .route("/products/{id}", get(handlers::product_detail))
        .route("/products/{id}/cart", post(handlers::add_to_cart))
        .route(
            "/cart",
            get(handlers::view_cart).post(handlers::cart_action),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
