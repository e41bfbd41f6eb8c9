/// Task endpoints: ownership-scoped CRUD
///
/// # Endpoints
///
/// - `GET /tasks` - list the caller's tasks, newest first
/// - `POST /tasks` - create a task owned by the caller
/// - `PATCH /tasks/:id` - update one of the caller's tasks
/// - `DELETE /tasks/:id` - permanently delete one of the caller's tasks
///
/// All routes sit behind the auth gate. Every lookup is scoped to the
/// caller's user id, and a miss answers 404 with one message whether the id
/// does not exist or belongs to someone else; the response must not leak
/// the existence of other users' tasks. Ownership is forced server-side on
/// create and cannot be reassigned by a patch.

use crate::{
    app::AppState,
    error::{ApiError, ApiJson, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tasktrack_shared::{
    auth::middleware::AuthContext,
    models::task::{CreateTask, Task, TaskStatus, UpdateTask},
};
use uuid::Uuid;
use validator::Validate;

/// One 404 message for "missing" and "not yours" alike
const TASK_NOT_FOUND: &str = "Task not found";

/// Create task request
///
/// Any owner field in the body is ignored; ownership always comes from the
/// authenticated caller.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Task name (required, non-empty)
    #[validate(length(min = 1, message = "task_name is required"))]
    pub task_name: String,

    /// Optional description
    pub description: Option<String>,

    /// Initial status (defaults to pending)
    #[serde(default)]
    pub status: TaskStatus,

    /// Optional due date
    pub due_date: Option<DateTime<Utc>>,
}

/// Delete task response
#[derive(Debug, Serialize)]
pub struct DeleteTaskResponse {
    /// Confirmation message
    pub message: String,
}

/// List the caller's tasks, newest-created first
pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list_by_owner(&state.db, auth.user_id).await?;

    Ok(Json(tasks))
}

/// Create a task owned by the caller
///
/// # Errors
///
/// - `400 Bad Request`: empty task_name
pub async fn create_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    ApiJson(req): ApiJson<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    req.validate()?;

    let task = Task::create(
        &state.db,
        CreateTask {
            // Owner is always the caller, regardless of request content
            user_id: auth.user_id,
            task_name: req.task_name,
            description: req.description,
            status: req.status,
            due_date: req.due_date,
        },
    )
    .await?;

    tracing::debug!(task_id = %task.id, user_id = %auth.user_id, "Task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// Update one of the caller's tasks
///
/// The patch type carries no owner field, so ownership cannot be reassigned
/// even if the request body supplies one.
///
/// # Errors
///
/// - `400 Bad Request`: empty patch or empty task_name
/// - `404 Not Found`: id missing or owned by another user (indistinguishable)
pub async fn update_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    ApiJson(patch): ApiJson<UpdateTask>,
) -> ApiResult<Json<Task>> {
    if patch.is_empty() {
        return Err(ApiError::BadRequest("No fields to update".to_string()));
    }
    if matches!(patch.task_name.as_deref(), Some("")) {
        return Err(ApiError::BadRequest("task_name cannot be empty".to_string()));
    }

    let task = Task::update_owned(&state.db, id, auth.user_id, patch)
        .await?
        .ok_or_else(|| ApiError::NotFound(TASK_NOT_FOUND.to_string()))?;

    Ok(Json(task))
}

/// Permanently delete one of the caller's tasks
///
/// # Errors
///
/// - `404 Not Found`: id missing or owned by another user (indistinguishable)
/// - `500 Internal Server Error`: store error
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DeleteTaskResponse>> {
    let deleted = Task::delete_owned(&state.db, id, auth.user_id).await?;

    if !deleted {
        return Err(ApiError::NotFound(TASK_NOT_FOUND.to_string()));
    }

    tracing::debug!(task_id = %id, user_id = %auth.user_id, "Task deleted");

    Ok(Json(DeleteTaskResponse {
        message: "Task deleted successfully".to_string(),
    }))
}
