use axum::extract::{Path, State};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::model::Submission;
use crate::state::AppState;

/// GET /api/submissions/:id - single entry detail, served from the cached
/// set (the dashboard's row-detail view).
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Submission> {
    let mut dashboard = state.dashboard.write().await;
    dashboard.ensure_loaded(state.store.as_ref()).await?;

    dashboard
        .get(&id)
        .cloned()
        .map(ApiResponse::success)
        .ok_or_else(|| ApiError::not_found(format!("No submission with id {id}")))
}
