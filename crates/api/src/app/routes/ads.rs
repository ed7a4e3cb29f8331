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
    Router::new().route("/", get(list_ads))
}

/// `contextKeys` may repeat, use `contextKeys[]`, or be comma-joined.
pub async fn list_ads(
    Extension(services): Extension<Arc<AppServices>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> axum::response::Response {
    let context_keys = dto::multi_value(&pairs, "contextKeys");
    match services.ads(&context_keys).await {
        Ok(ads) => Json(ads).into_response(),
        Err(e) => errors::gateway_error_to_response(e),
    }
}
