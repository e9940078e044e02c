use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};
use verso::domain::constants::SCALAR_PATH;
use verso::kernel::docs::{self, DocGroups};
use verso::kernel::routing::{RouteTable, with_version_fallback};
use verso::kernel::server::ApiState;

#[derive(OpenApi)]
struct ApiDoc;

pub(crate) fn init(state: &ApiState) -> Router {
    let api = ApiDoc::openapi();

    // Register every route and collect the documentation describing them
    let (api_routes, mut api_doc) = OpenApiRouter::with_openapi(api)
        .merge(verso::api_router())
        .merge(verso::server::router::system_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone())
        .split_for_parts();

    // The route table drives version resolution and the documentation groups
    let table = Arc::new(RouteTable::from_openapi(&api_doc));
    docs::decorate(&mut api_doc, &state.config.docs, &state.build);
    let groups = DocGroups::build(&api_doc, &table);

    // One Scalar UI for the full document plus one per group
    let mut app = Router::new()
        .merge(api_routes)
        .merge(docs::router(groups.clone()))
        .merge(Scalar::with_url(SCALAR_PATH, api_doc));
    for (name, doc) in groups.iter() {
        app = app.merge(Scalar::with_url(format!("{SCALAR_PATH}/{name}"), doc.clone()));
    }

    with_version_fallback(app, table)
}
