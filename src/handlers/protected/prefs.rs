use axum::extract::State;
use axum::Json;

use crate::middleware::{ApiResponse, ApiResult};
use crate::prefs::ColumnPrefs;
use crate::state::AppState;

/// GET /api/preferences/columns - saved column visibility, or the
/// all-visible default when nothing usable is stored.
pub async fn get_columns(State(state): State<AppState>) -> ApiResult<ColumnPrefs> {
    Ok(ApiResponse::success(ColumnPrefs::load(
        state.persist.as_ref(),
    )))
}

/// PUT /api/preferences/columns - replace the saved column visibility.
pub async fn put_columns(
    State(state): State<AppState>,
    Json(prefs): Json<ColumnPrefs>,
) -> ApiResult<ColumnPrefs> {
    prefs.save(state.persist.as_ref());
    Ok(ApiResponse::success(prefs))
}
