use crate::build_info::BuildInfo;
use axum::Json;
use axum::extract::State;
use verso_domain::constants::SYSTEM_TAG;

/// Serves the build metadata record captured at packaging time.
#[utoipa::path(
    get,
    path = "/info",
    responses((status = OK, description = "Build metadata of the running binary", body = BuildInfo)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn info_handler(State(build): State<BuildInfo>) -> Json<BuildInfo> {
    Json(build)
}
