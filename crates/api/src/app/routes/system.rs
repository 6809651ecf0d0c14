use axum::{http::StatusCode, response::IntoResponse, Json};

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn home() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Crop Recommendation API Running!" }))
}
