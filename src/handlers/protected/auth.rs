use axum::extract::State;
use serde_json::{json, Value};

use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/auth/whoami - reachable only through the session gate, so an
/// answer means the caller is signed in.
pub async fn whoami(State(_state): State<AppState>) -> ApiResult<Value> {
    Ok(ApiResponse::success(json!({ "authenticated": true })))
}

/// DELETE /api/auth/session - sign out, clearing the in-memory flag and its
/// persisted mirror.
pub async fn logout(State(state): State<AppState>) -> ApiResult<Value> {
    state.gate.logout();
    Ok(ApiResponse::success(json!({ "authenticated": false })))
}
