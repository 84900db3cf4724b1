use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::model::{NewSubmission, Submission};
use crate::state::AppState;

/// POST /submit - the public portfolio form.
///
/// Validation runs before any remote call; the store assigns id and
/// timestamp. New entries land in the New partition (no selected date).
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<NewSubmission>,
) -> ApiResult<Submission> {
    if let Err(field_errors) = payload.validate() {
        return Err(ApiError::validation_error(
            "Invalid submission",
            Some(field_errors),
        ));
    }

    let created = state.store.insert(payload).await?;
    tracing::info!("recorded submission {}", created.id);
    Ok(ApiResponse::created(created))
}
