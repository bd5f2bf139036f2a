use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use tdo::ops::TaskOps;
use tdo::server::{router, shared, SharedOps};

fn open_shared(temp: &TempDir) -> SharedOps {
    shared(TaskOps::open(temp.path().join("tasks.json")).expect("open store"))
}

async fn send(ops: &SharedOps, request: Request<Body>) -> (StatusCode, Value) {
    let response = router(ops.clone()).oneshot(request).await.expect("route");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn bare(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn add_returns_created_task() {
    let temp = TempDir::new().unwrap();
    let ops = open_shared(&temp);

    let (status, body) = send(
        &ops,
        with_json("POST", "/todos/add", json!({"text": "Buy milk"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "text": "Buy milk", "done": false}));

    // The mutation must hit the backing file.
    let reloaded = TaskOps::open(temp.path().join("tasks.json")).unwrap();
    assert_eq!(reloaded.list().len(), 1);
}

#[tokio::test]
async fn list_returns_all_tasks_in_order() {
    let temp = TempDir::new().unwrap();
    let ops = open_shared(&temp);

    send(&ops, with_json("POST", "/todos/add", json!({"text": "One"}))).await;
    send(&ops, with_json("POST", "/todos/add", json!({"text": "Two"}))).await;

    let (status, body) = send(&ops, get("/todos/list")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "text": "One", "done": false},
            {"id": 2, "text": "Two", "done": false},
        ])
    );
}

#[tokio::test]
async fn get_update_toggle_delete_by_id() {
    let temp = TempDir::new().unwrap();
    let ops = open_shared(&temp);

    send(&ops, with_json("POST", "/todos/add", json!({"text": "One"}))).await;

    let (status, body) = send(&ops, get("/todos/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "One");

    let (status, body) = send(
        &ops,
        with_json("PUT", "/todos/1", json!({"text": "Renamed"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "Renamed");

    let (status, body) = send(&ops, bare("PUT", "/todos/1/toggle")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["done"], json!(true));

    let (status, body) = send(&ops, bare("DELETE", "/todos/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(1));

    let (status, _) = send(&ops, get("/todos/list")).await;
    assert_eq!(status, StatusCode::OK);
    let reloaded = TaskOps::open(temp.path().join("tasks.json")).unwrap();
    assert!(reloaded.list().is_empty());
}

#[tokio::test]
async fn status_reports_counts() {
    let temp = TempDir::new().unwrap();
    let ops = open_shared(&temp);

    send(&ops, with_json("POST", "/todos/add", json!({"text": "One"}))).await;
    send(&ops, with_json("POST", "/todos/add", json!({"text": "Two"}))).await;
    send(&ops, bare("PUT", "/todos/1/toggle")).await;

    let (status, body) = send(&ops, get("/todos/status")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"total": 2, "done": 1, "pending": 1}));
}

#[tokio::test]
async fn missing_task_is_404_with_error_body() {
    let temp = TempDir::new().unwrap();
    let ops = open_shared(&temp);

    let (status, body) = send(&ops, get("/todos/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Task 42 not found"}));
}

#[tokio::test]
async fn non_numeric_id_is_400() {
    let temp = TempDir::new().unwrap();
    let ops = open_shared(&temp);

    let (status, body) = send(&ops, get("/todos/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid task id: abc"}));
}

#[tokio::test]
async fn blank_text_is_400() {
    let temp = TempDir::new().unwrap();
    let ops = open_shared(&temp);

    let (status, body) = send(
        &ops,
        with_json("POST", "/todos/add", json!({"text": "   "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Task text must not be empty"}));

    let reloaded = TaskOps::open(temp.path().join("tasks.json")).unwrap();
    assert!(reloaded.list().is_empty());
}

#[tokio::test]
async fn malformed_body_is_a_json_error() {
    let temp = TempDir::new().unwrap();
    let ops = open_shared(&temp);

    let request = Request::builder()
        .method("POST")
        .uri("/todos/add")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(&ops, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().expect("error field");
    assert!(message.starts_with("Invalid request body"));

    // Same shape for a body that is not JSON at all.
    let request = Request::builder()
        .method("PUT")
        .uri("/todos/1")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("plain text"))
        .unwrap();

    let (status, body) = send(&ops, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().expect("error field").starts_with("Invalid request body"));
}

#[tokio::test]
async fn toggle_twice_restores_pending() {
    let temp = TempDir::new().unwrap();
    let ops = open_shared(&temp);

    send(&ops, with_json("POST", "/todos/add", json!({"text": "One"}))).await;
    send(&ops, bare("PUT", "/todos/1/toggle")).await;
    let (_, body) = send(&ops, bare("PUT", "/todos/1/toggle")).await;
    assert_eq!(body["done"], json!(false));
}
