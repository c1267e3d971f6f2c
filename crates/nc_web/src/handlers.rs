use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nc_core::{HistoryEntry, Verdict};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub text: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn blank_submission() -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "submission is empty".to_string(),
        }
    }

    pub fn internal(message: String) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<Verdict>, ApiError> {
    // Blank submissions never reach the pipeline.
    if request.text.trim().is_empty() {
        return Err(ApiError::blank_submission());
    }

    let verdict = state.pipeline.analyze(&request.text).map_err(|e| {
        warn!(error = %e, "Prediction failed");
        ApiError::internal(e.to_string())
    })?;

    state.record(&request.text, &verdict).await;
    Ok(Json(verdict))
}

pub async fn get_history(State(state): State<Arc<AppState>>) -> Json<Vec<HistoryEntry>> {
    Json(state.history().await)
}

pub async fn clear_history(State(state): State<Arc<AppState>>) -> StatusCode {
    state.clear_history().await;
    StatusCode::NO_CONTENT
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "classifier": state.pipeline.classifier_name(),
        "features": state.pipeline.dimension(),
    }))
}
