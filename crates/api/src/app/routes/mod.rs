use axum::{
    routing::{get, post},
    Router,
};

pub mod market;
pub mod predict;
pub mod system;

/// Router for the recommendation and market endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/predict", post(predict::predict))
        .nest("/market", market::router())
}
