use super::state::ApiState;
use super::{health, info};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// The system endpoints every deployment gets (`/health`, `/info`).
pub fn system_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(health::health_handler))
        .routes(routes!(info::info_handler))
}
