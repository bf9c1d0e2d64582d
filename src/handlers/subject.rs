//! Subject handlers: list, create, update, delete. Logical outcomes are always HTTP 200;
//! only malformed payloads and store failures change the status code.

use crate::error::AppError;
use crate::response::Envelope;
use crate::service::SubjectMapper;
use crate::state::AppState;
use crate::subject::SubjectFields;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::Value;

fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    body.map(|Json(v)| v).map_err(|e| AppError::BadRequest(e.body_text()))
}

#[utoipa::path(
    get,
    path = "/subjects",
    responses((status = 200, description = "All stored subjects", body = Envelope))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Envelope>, AppError> {
    Ok(Json(SubjectMapper::list(state.store.as_ref()).await?))
}

#[utoipa::path(
    post,
    path = "/subjects",
    request_body = SubjectFields,
    responses(
        (status = 200, description = "Subject added", body = Envelope),
        (status = 400, description = "Missing or mistyped field", body = Envelope)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Envelope>, AppError> {
    let payload = json_body(body)?;
    Ok(Json(SubjectMapper::create(state.store.as_ref(), payload).await?))
}

#[utoipa::path(
    put,
    path = "/subjects/{id}",
    params(("id" = String, Path, description = "Subject id")),
    request_body = SubjectFields,
    responses(
        (status = 200, description = "Subject updated (also reported when the id is unknown)", body = Envelope),
        (status = 400, description = "Missing or mistyped field", body = Envelope)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Envelope>, AppError> {
    let payload = json_body(body)?;
    Ok(Json(SubjectMapper::update(state.store.as_ref(), &id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/subjects/{id}",
    params(("id" = String, Path, description = "Subject id")),
    responses((status = 200, description = "Removed, or status fail when the id is unknown", body = Envelope))
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope>, AppError> {
    Ok(Json(SubjectMapper::delete(state.store.as_ref(), &id).await?))
}
