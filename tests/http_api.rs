use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use subjects_api::{app_router, AppState, InMemorySubjectStore};
use tower::ServiceExt as _;

fn app() -> Router {
    app_router(AppState::new(Arc::new(InMemorySubjectStore::new())))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn math() -> Value {
    json!({ "name": "Math", "teacher": "Alice", "inprogress": true, "description": "intro" })
}

async fn list(app: &Router) -> Vec<Value> {
    let (status, body) = send(app, "GET", "/subjects", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    body["subjects"].as_array().cloned().unwrap()
}

#[tokio::test]
async fn empty_list() {
    let app = app();
    let (status, body) = send(&app, "GET", "/subjects", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success", "subjects": [] }));
}

#[tokio::test]
async fn create_then_list_returns_the_record() {
    let app = app();
    let (status, body) = send(&app, "POST", "/subjects", Some(math())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success", "message": "Disciplina Adicionada!" }));

    let subjects = list(&app).await;
    assert_eq!(subjects.len(), 1);
    let s = &subjects[0];
    assert_eq!(s["name"], "Math");
    assert_eq!(s["teacher"], "Alice");
    assert_eq!(s["inprogress"], true);
    assert_eq!(s["description"], "intro");
    assert!(!s["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn client_supplied_id_is_replaced() {
    let app = app();
    let mut body = math();
    body["id"] = json!("chosen-by-client");
    send(&app, "POST", "/subjects", Some(body)).await;
    let subjects = list(&app).await;
    assert_ne!(subjects[0]["id"], "chosen-by-client");
}

#[tokio::test]
async fn consecutive_creates_get_distinct_ids() {
    let app = app();
    send(&app, "POST", "/subjects", Some(math())).await;
    send(&app, "POST", "/subjects", Some(math())).await;
    let subjects = list(&app).await;
    assert_eq!(subjects.len(), 2);
    assert_ne!(subjects[0]["id"], subjects[1]["id"]);
}

#[tokio::test]
async fn update_replaces_fields_under_same_id() {
    let app = app();
    send(&app, "POST", "/subjects", Some(math())).await;
    let id = list(&app).await[0]["id"].as_str().unwrap().to_string();

    let new_fields = json!({ "name": "Physics", "teacher": "Bob", "inprogress": false, "description": "mechanics" });
    let (status, body) = send(&app, "PUT", &format!("/subjects/{}", id), Some(new_fields)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success", "message": "Disciplina Atualizada!" }));

    let subjects = list(&app).await;
    assert_eq!(subjects.len(), 1);
    assert_eq!(
        subjects[0],
        json!({ "id": id, "name": "Physics", "teacher": "Bob", "inprogress": false, "description": "mechanics" })
    );
}

#[tokio::test]
async fn update_of_unknown_id_reports_success() {
    let app = app();
    let (status, body) = send(&app, "PUT", "/subjects/does-not-exist", Some(math())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn delete_removes_then_reports_not_found() {
    let app = app();
    send(&app, "POST", "/subjects", Some(math())).await;
    let id = list(&app).await[0]["id"].as_str().unwrap().to_string();
    let uri = format!("/subjects/{}", id);

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success", "message": "Disciplina Removida!" }));
    assert!(list(&app).await.is_empty());

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "fail", "message": "Disciplina não encontrada!" }));
}

#[tokio::test]
async fn missing_field_is_a_client_error() {
    let app = app();
    let (status, body) = send(&app, "POST", "/subjects", Some(json!({ "name": "Math" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
    assert!(body["message"].as_str().unwrap().contains("teacher is required"));
    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn update_with_missing_field_is_rejected_and_row_kept() {
    let app = app();
    send(&app, "POST", "/subjects", Some(math())).await;
    let before = list(&app).await;
    let id = before[0]["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, "PUT", &format!("/subjects/{}", id), Some(json!({ "name": "Physics" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
    assert!(body["message"].as_str().unwrap().contains("teacher is required"));
    assert_eq!(list(&app).await, before);
}

#[tokio::test]
async fn update_with_mistyped_flag_is_rejected_and_row_kept() {
    let app = app();
    send(&app, "POST", "/subjects", Some(math())).await;
    let before = list(&app).await;
    let id = before[0]["id"].as_str().unwrap().to_string();

    let mut bad = math();
    bad["name"] = json!("Physics");
    bad["inprogress"] = json!("yes");
    let (status, body) = send(&app, "PUT", &format!("/subjects/{}", id), Some(bad)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
    assert_eq!(list(&app).await, before);
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/subjects")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "fail");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = app();
    let request = Request::builder()
        .method("GET")
        .uri("/subjects")
        .header("origin", "http://front.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers().get("access-control-allow-origin").unwrap(), "*");
}

#[tokio::test]
async fn health_ready_and_docs() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");

    let (status, body) = send(&app, "GET", "/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/subjects"].is_object());
    assert!(body["paths"]["/subjects/{id}"].is_object());
}
