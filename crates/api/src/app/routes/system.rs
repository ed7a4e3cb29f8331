use axum::{http::StatusCode, Json};

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn ping() -> Json<&'static str> {
    Json("pong")
}
