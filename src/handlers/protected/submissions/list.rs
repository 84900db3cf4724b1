use axum::extract::{Query, State};
use serde::Deserialize;

use crate::listing::{Sort, SortDirection, SortField, Tab, ViewPage, ViewQuery};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// Flat form of the view parameters, as they arrive in a query string or a
/// draw request body. A direction without a sort field is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ViewParams {
    pub search: Option<String>,
    pub tab: Option<Tab>,
    pub sort: Option<SortField>,
    pub direction: Option<SortDirection>,
    pub page: Option<usize>,
}

impl ViewParams {
    pub fn into_query(self) -> ViewQuery {
        ViewQuery {
            search: self.search.unwrap_or_default(),
            tab: self.tab.unwrap_or_default(),
            sort: self.sort.map(|field| Sort {
                field,
                direction: self.direction.unwrap_or(SortDirection::Asc),
            }),
            page: self.page.unwrap_or(1),
        }
    }
}

/// GET /api/submissions - one page of the filtered/sorted/partitioned view.
///
/// The full collection is fetched from the store on first access and cached;
/// an unavailable store answers 503 so the dashboard can tell "service down"
/// from "no submissions yet".
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> ApiResult<ViewPage> {
    let mut dashboard = state.dashboard.write().await;
    dashboard.ensure_loaded(state.store.as_ref()).await?;
    Ok(ApiResponse::success(dashboard.view(&params.into_query())))
}
