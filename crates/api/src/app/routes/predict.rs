use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Query,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use cropwise_ai::FeatureVector;

use crate::app::dto::{PredictQuery, PredictionResponse};
use crate::app::errors;
use crate::app::state::AppState;

/// Rank crops for one set of soil/climate measurements.
///
/// Query parameters:
/// - `top_k`: number of recommendations (default from config, clamped to the label count)
pub async fn predict(
    Extension(state): Extension<Arc<AppState>>,
    query: Result<Query<PredictQuery>, QueryRejection>,
    body: Result<Json<FeatureVector>, JsonRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return errors::query_rejection_to_response(rejection),
    };
    let Json(features) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    if let Err(e) = features.validate() {
        return errors::domain_error_to_response(e);
    }

    let k = match query.resolve(state.config.top_k) {
        Ok(k) => k,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match state.model.recommend(&features, k) {
        Ok(recommendations) => {
            (StatusCode::OK, Json(PredictionResponse { recommendations })).into_response()
        }
        Err(e) => errors::ai_error_to_response(e),
    }
}
