//! OpenAPI document for the subject endpoints, served at `/openapi.json`.

use crate::handlers::subject;
use crate::response::{Envelope, Status};
use crate::subject::{Subject, SubjectFields};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Subjects API", description = "CRUD over course subjects"),
    paths(subject::list, subject::create, subject::update, subject::delete),
    components(schemas(Subject, SubjectFields, Envelope, Status)),
    tags((name = "subjects"))
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn docs_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi))
}
