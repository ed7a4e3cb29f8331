use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/:product_id", get(get_product))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(q): Query<dto::CurrencyQuery>,
) -> axum::response::Response {
    match services.products(q.currency_code.as_deref()).await {
        Ok(products) => Json(products).into_response(),
        Err(e) => errors::gateway_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(product_id): Path<String>,
    Query(q): Query<dto::CurrencyQuery>,
) -> axum::response::Response {
    match services.product(&product_id, q.currency_code.as_deref()).await {
        Ok(product) => Json(product).into_response(),
        Err(e) => errors::gateway_error_to_response(e),
    }
}
