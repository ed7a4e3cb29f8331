use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use storefront_core::{AddItemRequest, EmptyCartRequest};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", get(get_cart).post(add_item).delete(empty_cart))
}

/// A missing `sessionId` is passed on as the empty key, not rejected.
pub async fn get_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Query(q): Query<dto::CartQuery>,
) -> axum::response::Response {
    match services
        .cart_view(&q.session_id, q.currency_code.as_deref())
        .await
    {
        Ok(cart) => Json(cart).into_response(),
        Err(e) => errors::gateway_error_to_response(e),
    }
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<AddItemRequest>,
) -> axum::response::Response {
    match services.add_to_cart(body).await {
        Ok(cart) => Json(cart).into_response(),
        Err(e) => errors::gateway_error_to_response(e),
    }
}

pub async fn empty_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<EmptyCartRequest>,
) -> axum::response::Response {
    match services.empty_cart(&body.user_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::gateway_error_to_response(e),
    }
}
