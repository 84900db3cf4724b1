use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// POST /auth/login - authenticate against the shared admin password.
///
/// On match the session gate flips to authenticated and the flag is
/// persisted, so a restart keeps the session.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Value> {
    if !state.gate.login(&payload.password) {
        return Err(ApiError::unauthorized("Incorrect password. Please try again."));
    }
    Ok(ApiResponse::success(json!({ "authenticated": true })))
}
