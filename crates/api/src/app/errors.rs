use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use storefront_gateways::GatewayError;

pub fn gateway_error_to_response(err: GatewayError) -> axum::response::Response {
    tracing::warn!(error = %err, "collaborator call failed");
    match err {
        GatewayError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, "not_found", msg),
        GatewayError::InvalidArgument(msg) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_argument", msg)
        }
        GatewayError::Unavailable(msg) => {
            json_error(StatusCode::BAD_GATEWAY, "upstream_unavailable", msg)
        }
    }
}

/// A structured query parameter that did not parse.
pub fn invalid_query(message: impl Into<String>) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_query", message)
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
