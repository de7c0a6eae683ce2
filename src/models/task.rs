use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::datetime;

/// Represents a task entity as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique identifier for the task.
    pub id: i64,
    /// The title of the task.
    pub title: String,
    /// An optional description for the task.
    pub description: Option<String>,
    /// Optional deadline for the task (naive UTC).
    pub deadline: Option<NaiveDateTime>,
    /// Whether the task has been completed.
    pub completed: bool,
    /// Identifier of the project this task belongs to, if any.
    pub project_id: Option<i64>,
}

/// Input structure for creating a task.
/// Contains validation rules for its fields.
#[derive(Debug, Deserialize, Validate)]
pub struct TaskInput {
    /// The title of the task. Must be between 1 and 200 characters.
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// An optional description for the task.
    /// Maximum length of 1000 characters if provided.
    #[validate(length(max = 1000))]
    pub description: Option<String>,

    /// Optional deadline; offset-carrying input is normalized to naive UTC.
    #[serde(default, deserialize_with = "datetime::deserialize_option")]
    pub deadline: Option<NaiveDateTime>,

    /// Whether the task is already completed. Defaults to `false`.
    #[serde(default)]
    pub completed: bool,

    /// Project to attach the task to. The project must exist and the task
    /// deadline must not be later than the project deadline.
    pub project_id: Option<i64>,
}

/// Input structure for updating a task. Absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct TaskUpdate {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "datetime::deserialize_option")]
    pub deadline: Option<NaiveDateTime>,
    pub completed: Option<bool>,
    pub project_id: Option<i64>,
}
