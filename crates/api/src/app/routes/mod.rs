use axum::{routing::get, Router};

use crate::middleware;

pub mod ads;
pub mod cart;
pub mod checkout;
pub mod currency;
pub mod products;
pub mod recommendations;
pub mod shipping;
pub mod system;

/// Router for every storefront endpoint (mounted under `/api`).
///
/// Each area lists its methods explicitly and the method router answers
/// anything else with 405. `HEAD` is rejected up front since every `get`
/// route would otherwise serve it.
pub fn router() -> Router {
    Router::new()
        .route("/ping", get(system::ping))
        .nest("/cart", cart::router())
        .nest("/checkout", checkout::router())
        .nest("/products", products::router())
        .nest("/recommendations", recommendations::router())
        .nest("/shipping", shipping::router())
        .nest("/currency", currency::router())
        .nest("/data", ads::router())
        .route_layer(axum::middleware::from_fn(middleware::reject_head))
}
