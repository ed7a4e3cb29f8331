use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, routing::get, Json, Router};

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", get(list_currencies))
}

pub async fn list_currencies(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.currencies().await {
        Ok(codes) => Json(codes).into_response(),
        Err(e) => errors::gateway_error_to_response(e),
    }
}
