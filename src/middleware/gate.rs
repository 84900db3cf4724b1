use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Session-gate guard for the admin surface: unauthenticated requests are
/// rejected before the handler runs. This mirrors the dashboard's redirect
/// away from the protected view; it is UI gating, not access control.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !state.gate.is_authenticated() {
        return Err(ApiError::unauthorized("Sign in required"));
    }
    Ok(next.run(request).await)
}
