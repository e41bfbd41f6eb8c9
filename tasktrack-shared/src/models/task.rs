/// Task model and ownership-scoped database operations
///
/// Every task is owned by exactly one user and all reads and mutations are
/// scoped to that owner at the query level. A lookup that misses returns
/// `None` whether the id does not exist or belongs to someone else, which is
/// what lets the boundary answer both cases with the same 404.
///
/// # Status
///
/// ```text
/// pending | in_progress | completed
/// ```
///
/// Any status is reachable from any other; there is no workflow enforcement.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE task_status AS ENUM ('pending', 'in_progress', 'completed');
///
/// CREATE TABLE tasks (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     task_name TEXT NOT NULL,
///     description TEXT,
///     status task_status NOT NULL DEFAULT 'pending',
///     due_date TIMESTAMPTZ,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
///
/// CREATE INDEX idx_tasks_user_id ON tasks(user_id);
/// ```
///
/// # Example
///
/// ```no_run
/// use tasktrack_shared::models::task::{Task, CreateTask, TaskStatus};
/// use sqlx::PgPool;
/// use uuid::Uuid;
///
/// # async fn example(pool: PgPool, owner: Uuid) -> Result<(), sqlx::Error> {
/// let task = Task::create(&pool, CreateTask {
///     user_id: owner,
///     task_name: "Buy milk".to_string(),
///     description: None,
///     status: TaskStatus::Pending,
///     due_date: None,
/// }).await?;
///
/// let mine = Task::list_by_owner(&pool, owner).await?;
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Task status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started yet (default for new tasks)
    #[default]
    Pending,

    /// Being worked on
    InProgress,

    /// Done
    Completed,
}

impl TaskStatus {
    /// Converts status to its wire/database string
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }
}

/// Task model representing a to-do item
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID
    pub id: Uuid,

    /// Owning user; immutable after creation
    pub user_id: Uuid,

    /// Human-readable task name (non-empty)
    pub task_name: String,

    /// Optional free-text description
    pub description: Option<String>,

    /// Current status
    pub status: TaskStatus,

    /// Optional due date
    pub due_date: Option<DateTime<Utc>>,

    /// When the task was created (immutable)
    pub created_at: DateTime<Utc>,

    /// When the task was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new task
///
/// `user_id` is always set by the service to the authenticated caller,
/// never taken from client input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Owning user
    pub user_id: Uuid,

    /// Task name
    pub task_name: String,

    /// Optional description
    pub description: Option<String>,

    /// Initial status (defaults to pending)
    #[serde(default)]
    pub status: TaskStatus,

    /// Optional due date
    pub due_date: Option<DateTime<Utc>>,
}

/// Patch for updating a task
///
/// Only non-None fields are written. There is deliberately no owner field
/// here; ownership cannot be reassigned through an update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// New task name
    pub task_name: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New status
    pub status: Option<TaskStatus>,

    /// New due date
    pub due_date: Option<DateTime<Utc>>,
}

impl UpdateTask {
    /// True when the patch carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.task_name.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.due_date.is_none()
    }
}

impl Task {
    /// Creates a new task
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create(pool: &PgPool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (user_id, task_name, description, status, due_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, task_name, description, status, due_date,
                      created_at, updated_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.task_name)
        .bind(data.description)
        .bind(data.status)
        .bind(data.due_date)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Lists a user's tasks, newest-created first
    pub async fn list_by_owner(pool: &PgPool, owner: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, user_id, task_name, description, status, due_date,
                   created_at, updated_at
            FROM tasks
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Applies a patch to an owned task
    ///
    /// The WHERE clause pins both id and owner, so the read-then-write is a
    /// single atomic statement and a non-owner caller observes the same
    /// `None` as a missing id. Only non-None patch fields are written.
    pub async fn update_owned(
        pool: &PgPool,
        id: Uuid,
        owner: Uuid,
        data: UpdateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        // Build dynamic update query based on which fields are present
        let mut query = String::from("UPDATE tasks SET updated_at = NOW()");
        let mut bind_count = 2;

        if data.task_name.is_some() {
            bind_count += 1;
            query.push_str(&format!(", task_name = ${}", bind_count));
        }
        if data.description.is_some() {
            bind_count += 1;
            query.push_str(&format!(", description = ${}", bind_count));
        }
        if data.status.is_some() {
            bind_count += 1;
            query.push_str(&format!(", status = ${}", bind_count));
        }
        if data.due_date.is_some() {
            bind_count += 1;
            query.push_str(&format!(", due_date = ${}", bind_count));
        }

        query.push_str(
            " WHERE id = $1 AND user_id = $2 \
             RETURNING id, user_id, task_name, description, status, due_date, \
             created_at, updated_at",
        );

        let mut q = sqlx::query_as::<_, Task>(&query).bind(id).bind(owner);

        if let Some(task_name) = data.task_name {
            q = q.bind(task_name);
        }
        if let Some(description) = data.description {
            q = q.bind(description);
        }
        if let Some(status) = data.status {
            q = q.bind(status);
        }
        if let Some(due_date) = data.due_date {
            q = q.bind(due_date);
        }

        let task = q.fetch_optional(pool).await?;

        Ok(task)
    }

    /// Permanently deletes an owned task
    ///
    /// Returns false both for a missing id and for someone else's task;
    /// there is no soft delete.
    pub async fn delete_owned(pool: &PgPool, id: Uuid, owner: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
