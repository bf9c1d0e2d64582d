//! Router assembly. CORS is open to every origin; every request is traced.

mod common;
mod docs;
mod subject;

pub use common::common_routes;
pub use docs::{docs_routes, ApiDoc};
pub use subject::subject_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Full application: subject CRUD, common routes and the OpenAPI document.
pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(subject_routes(state.clone()))
        .merge(common_routes(state))
        .merge(docs_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
