use axum::extract::State;
use serde_json::{json, Value};

use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// POST /api/submissions/refresh - drop the cached set and re-fetch the
/// full collection, the way the dashboard does when it is reopened.
pub async fn refresh(State(state): State<AppState>) -> ApiResult<Value> {
    let mut dashboard = state.dashboard.write().await;
    let count = dashboard.refresh(state.store.as_ref()).await?;
    Ok(ApiResponse::success(json!({ "loaded": count })))
}
