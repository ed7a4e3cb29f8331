use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", get(list_recommendations))
}

/// `productIds` may repeat, use `productIds[]`, or be comma-joined.
pub async fn list_recommendations(
    Extension(services): Extension<Arc<AppServices>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> axum::response::Response {
    let session_id = dto::single_value(&pairs, "sessionId").unwrap_or_default();
    let product_ids = dto::multi_value(&pairs, "productIds");
    let currency = dto::single_value(&pairs, "currencyCode");

    match services
        .recommendations(session_id, &product_ids, currency)
        .await
    {
        Ok(products) => Json(products).into_response(),
        Err(e) => errors::gateway_error_to_response(e),
    }
}
