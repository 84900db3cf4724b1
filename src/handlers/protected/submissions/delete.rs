use axum::extract::{Path, Query, State};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    #[serde(default)]
    pub confirm: bool,
}

/// DELETE /api/submissions/:id?confirm=true - permanent removal.
///
/// The confirmation flag is the explicit user confirmation step and is
/// checked before anything else; without it no remote call is attempted.
/// There is no undo.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<DeleteParams>,
) -> ApiResult<Value> {
    if !params.confirm {
        return Err(ApiError::bad_request(
            "Deleting a submission cannot be undone; pass confirm=true to proceed",
        ));
    }

    let mut dashboard = state.dashboard.write().await;
    dashboard.ensure_loaded(state.store.as_ref()).await?;
    dashboard.delete(state.store.as_ref(), &id).await?;

    tracing::info!("deleted submission {}", id);
    Ok(ApiResponse::success(json!({ "deleted": id })))
}
