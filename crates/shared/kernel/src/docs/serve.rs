use super::groups::{DocGroups, GroupSummary};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use utoipa::openapi::OpenApi;
use verso_domain::constants::API_DOCS_PATH;

/// Routes serving the machine-readable documentation: the group listing and
/// one JSON document per group.
#[must_use]
pub fn router(groups: DocGroups) -> Router {
    Router::new()
        .route(API_DOCS_PATH, get(list_groups))
        .route(&format!("{API_DOCS_PATH}/{{group}}/openapi.json"), get(group_schema))
        .with_state(Arc::new(groups))
}

async fn list_groups(State(groups): State<Arc<DocGroups>>) -> Json<Vec<GroupSummary>> {
    Json(groups.summaries())
}

async fn group_schema(
    State(groups): State<Arc<DocGroups>>,
    Path(group): Path<String>,
) -> Result<Json<OpenApi>, StatusCode> {
    groups.get(&group).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}
