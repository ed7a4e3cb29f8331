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
    Router::new().route("/", get(get_quote))
}

/// `itemList` and `address` arrive as JSON documents inside the query string.
pub async fn get_quote(
    Extension(services): Extension<Arc<AppServices>>,
    Query(q): Query<dto::ShippingQuery>,
) -> axum::response::Response {
    let request = match q.parse() {
        Ok(r) => r,
        Err(msg) => return errors::invalid_query(msg),
    };

    match services
        .shipping_quote(&request.items, &request.address, q.currency_code.as_deref())
        .await
    {
        Ok(cost) => Json(cost).into_response(),
        Err(e) => errors::gateway_error_to_response(e),
    }
}
