use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use storefront_core::PlaceOrderRequest;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", post(place_order))
}

pub async fn place_order(
    Extension(services): Extension<Arc<AppServices>>,
    Query(q): Query<dto::CurrencyQuery>,
    Json(body): Json<PlaceOrderRequest>,
) -> axum::response::Response {
    let user_id = body.user_id.clone();
    match services.checkout(body, q.currency_code.as_deref()).await {
        Ok(order) => {
            tracing::info!(user_id = %user_id, order_id = %order.order_id, "order placed");
            Json(order).into_response()
        }
        Err(e) => errors::gateway_error_to_response(e),
    }
}
