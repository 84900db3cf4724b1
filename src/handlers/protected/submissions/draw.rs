use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use super::list::ViewParams;
use crate::listing::DrawCommit;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// POST /api/submissions/draw - pick up to five entries at random from the
/// currently filtered-and-sorted view. Nothing is persisted until the draw
/// is committed.
pub async fn draw(
    State(state): State<AppState>,
    Json(params): Json<ViewParams>,
) -> ApiResult<Value> {
    let mut dashboard = state.dashboard.write().await;
    dashboard.ensure_loaded(state.store.as_ref()).await?;

    let entries = dashboard.draw(&params.into_query());
    Ok(ApiResponse::success(json!({ "entries": entries })))
}

#[derive(Debug, Deserialize)]
pub struct CommitRequest {
    pub ids: Vec<String>,
}

/// POST /api/submissions/draw/commit - the "Copy & Close" action.
///
/// Batch-selects the drawn ids with today's date, mirrors the change into
/// the cached set, and returns the plain-text summary block for the
/// clipboard. The clipboard write itself is the client's concern and is
/// best-effort; a failure there does not undo the committed selection.
pub async fn commit(
    State(state): State<AppState>,
    Json(payload): Json<CommitRequest>,
) -> ApiResult<DrawCommit> {
    let mut dashboard = state.dashboard.write().await;
    dashboard.ensure_loaded(state.store.as_ref()).await?;

    let committed = dashboard
        .commit_draw(state.store.as_ref(), &payload.ids)
        .await?;
    tracing::info!(
        "selected {} submissions for {}",
        committed.entries.len(),
        committed.selected_date
    );
    Ok(ApiResponse::success(committed))
}
