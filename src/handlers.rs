use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::pipeline::{self, TranslateAndSpeakRequest, TranslateAndSpeakResponse};
use crate::state::AppState;

pub async fn translate_and_speak(
    State(state): State<AppState>,
    payload: Result<Json<TranslateAndSpeakRequest>, JsonRejection>,
) -> Result<Json<TranslateAndSpeakResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let response = pipeline::translate_and_speak(&state, &request).await?;
    Ok(Json(response))
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "speech_enabled": state.synthesizer.is_enabled(),
    }))
}
