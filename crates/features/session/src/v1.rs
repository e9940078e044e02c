use axum::Json;
use axum::extract::Path;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use verso_domain::constants::SESSION_TAG;

/// Session as of v1.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[schema(as = SessionV1)]
#[serde(rename_all = "camelCase")]
struct Session {
    id: String,
    user: String,
    started_at: DateTime<Utc>,
}

pub(crate) fn router<S>() -> OpenApiRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    OpenApiRouter::new().routes(routes!(list_sessions)).routes(routes!(get_session))
}

fn sample(id: &str, user: &str) -> Session {
    Session { id: id.to_owned(), user: user.to_owned(), started_at: Utc::now() }
}

#[utoipa::path(
    get,
    path = "/api/v1/session",
    responses((status = OK, description = "Every active session", body = [Session])),
    tag = SESSION_TAG,
)]
async fn list_sessions() -> Json<Vec<Session>> {
    Json(vec![sample("s-1", "mari"), sample("s-2", "jaan")])
}

#[utoipa::path(
    get,
    path = "/api/v1/session/{id}",
    params(("id" = String, Path, description = "Session identifier")),
    responses((status = OK, description = "A single session", body = Session)),
    tag = SESSION_TAG,
)]
async fn get_session(Path(id): Path<String>) -> Json<Session> {
    Json(sample(&id, "sample"))
}
