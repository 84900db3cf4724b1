use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::middleware::{ApiResponse, ApiResult};
use crate::model::Submission;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub selected: bool,
}

/// PATCH /api/submissions/:id/selected - the row checkbox.
///
/// Checking stamps today's date, unchecking clears it. The cached row
/// changes only after the store confirms; a store failure is surfaced
/// instead of silently showing success.
pub async fn select(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<SelectRequest>,
) -> ApiResult<Submission> {
    let mut dashboard = state.dashboard.write().await;
    dashboard.ensure_loaded(state.store.as_ref()).await?;

    let updated = dashboard
        .set_selected(state.store.as_ref(), &id, payload.selected)
        .await?;
    Ok(ApiResponse::success(updated))
}
