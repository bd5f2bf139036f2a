//! HTTP API over the task operations layer.
//!
//! Thin route table: every handler translates one request into a single
//! operations-layer call and maps the result to JSON. Route shapes:
//!
//! ```text
//! POST   /todos/add          create a task        -> 201 + task
//! GET    /todos/list         list all tasks       -> 200 + [task]
//! GET    /todos/status       summary counts       -> 200 + report
//! GET    /todos/:id          fetch one task       -> 200 + task
//! PUT    /todos/:id          replace task text    -> 200 + task
//! PUT    /todos/:id/toggle   flip done            -> 200 + task
//! DELETE /todos/:id          delete a task        -> 200 + task
//! ```
//!
//! Errors become `{"error": "<message>"}` with 400/404/500 per the
//! operations-layer classification.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::ops::TaskOps;
use crate::task::{StatusReport, Task};

/// Shared handle to the operations layer
pub type SharedOps = Arc<Mutex<TaskOps>>;

/// Wrap an operations layer for the router state
pub fn shared(ops: TaskOps) -> SharedOps {
    Arc::new(Mutex::new(ops))
}

/// Build the route table over a shared operations layer
pub fn router(ops: SharedOps) -> Router {
    Router::new()
        .route("/todos/add", post(add_task))
        .route("/todos/list", get(list_tasks))
        .route("/todos/status", get(task_status))
        .route(
            "/todos/:id",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/todos/:id/toggle", put(toggle_task))
        .with_state(ops)
}

/// Serve on an already-bound listener until shutdown
pub async fn serve(ops: SharedOps, listener: tokio::net::TcpListener) -> Result<()> {
    tracing::info!(addr = %listener.local_addr()?, "tdo api listening");
    axum::serve(listener, router(ops)).await?;
    Ok(())
}

/// Request body for create and update
#[derive(Debug, Deserialize)]
struct TaskTextBody {
    text: String,
}

/// Error wrapper carrying the HTTP mapping
struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

// A body the Json extractor rejects must still produce the JSON error shape.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(Error::InvalidBody(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

/// Acquire the operations lock; a poisoned lock is an internal error
fn lock(ops: &SharedOps) -> std::result::Result<MutexGuard<'_, TaskOps>, ApiError> {
    ops.lock()
        .map_err(|_| ApiError(Error::OperationFailed("task store lock poisoned".to_string())))
}

async fn add_task(
    State(ops): State<SharedOps>,
    body: std::result::Result<Json<TaskTextBody>, JsonRejection>,
) -> std::result::Result<(StatusCode, Json<Task>), ApiError> {
    let Json(body) = body?;
    let task = lock(&ops)?.add(&body.text)?;
    Ok((StatusCode::CREATED, Json(task)))
}

async fn list_tasks(
    State(ops): State<SharedOps>,
) -> std::result::Result<Json<Vec<Task>>, ApiError> {
    let tasks = lock(&ops)?.list().to_vec();
    Ok(Json(tasks))
}

async fn task_status(
    State(ops): State<SharedOps>,
) -> std::result::Result<Json<StatusReport>, ApiError> {
    let report = lock(&ops)?.status();
    Ok(Json(report))
}

async fn get_task(
    State(ops): State<SharedOps>,
    Path(id): Path<String>,
) -> std::result::Result<Json<Task>, ApiError> {
    let task = lock(&ops)?.get(&id)?.clone();
    Ok(Json(task))
}

async fn update_task(
    State(ops): State<SharedOps>,
    Path(id): Path<String>,
    body: std::result::Result<Json<TaskTextBody>, JsonRejection>,
) -> std::result::Result<Json<Task>, ApiError> {
    let Json(body) = body?;
    let task = lock(&ops)?.update(&id, &body.text)?;
    Ok(Json(task))
}

async fn toggle_task(
    State(ops): State<SharedOps>,
    Path(id): Path<String>,
) -> std::result::Result<Json<Task>, ApiError> {
    let task = lock(&ops)?.toggle(&id)?;
    Ok(Json(task))
}

async fn delete_task(
    State(ops): State<SharedOps>,
    Path(id): Path<String>,
) -> std::result::Result<Json<Task>, ApiError> {
    let task = lock(&ops)?.remove(&id)?;
    Ok(Json(task))
}
