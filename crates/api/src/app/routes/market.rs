use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::dto::{DaysQuery, HistoryResponse};
use crate::app::errors;
use crate::app::state::AppState;

pub fn router() -> Router {
    Router::new()
        .route("/price/:crop", get(current_price))
        .route("/history/:crop", get(price_history))
        .route("/stats/:crop", get(price_stats))
        .route("/trend/:crop", get(market_trend))
}

pub async fn current_price(
    Extension(state): Extension<Arc<AppState>>,
    Path(crop): Path<String>,
) -> axum::response::Response {
    (StatusCode::OK, Json(state.market.current_price(&crop))).into_response()
}

/// Query parameters:
/// - `days`: window length (default: 30, max: `CROPWISE_MAX_HISTORY_DAYS`)
pub async fn price_history(
    Extension(state): Extension<Arc<AppState>>,
    Path(crop): Path<String>,
    query: Result<Query<DaysQuery>, QueryRejection>,
) -> axum::response::Response {
    let days = match resolve_days(query, state.config.max_history_days) {
        Ok(d) => d,
        Err(res) => return res,
    };

    match state.market.price_history(&crop, days) {
        Ok(history) => (StatusCode::OK, Json(HistoryResponse { crop, history })).into_response(),
        Err(e) => errors::market_error_to_response(e),
    }
}

pub async fn price_stats(
    Extension(state): Extension<Arc<AppState>>,
    Path(crop): Path<String>,
    query: Result<Query<DaysQuery>, QueryRejection>,
) -> axum::response::Response {
    let days = match resolve_days(query, state.config.max_history_days) {
        Ok(d) => d,
        Err(res) => return res,
    };

    match state.market.price_stats(&crop, days) {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(e) => errors::market_error_to_response(e),
    }
}

pub async fn market_trend(
    Extension(state): Extension<Arc<AppState>>,
    Path(crop): Path<String>,
) -> axum::response::Response {
    match state.market.market_trend(&crop) {
        Ok(trend) => (StatusCode::OK, Json(trend)).into_response(),
        Err(e) => errors::market_error_to_response(e),
    }
}

fn resolve_days(
    query: Result<Query<DaysQuery>, QueryRejection>,
    max: u32,
) -> Result<u32, axum::response::Response> {
    let Query(query) = query.map_err(errors::query_rejection_to_response)?;
    query.resolve(max).map_err(errors::domain_error_to_response)
}
