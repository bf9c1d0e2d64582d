//! Subject CRUD routes: `/subjects` and `/subjects/:id`.

use crate::handlers::subject::{create, delete as delete_handler, list, update};
use crate::state::AppState;
use axum::{routing::get, routing::put, Router};

pub fn subject_routes(state: AppState) -> Router {
    Router::new()
        .route("/subjects", get(list).post(create))
        .route("/subjects/:id", put(update).delete(delete_handler))
        .with_state(state)
}
