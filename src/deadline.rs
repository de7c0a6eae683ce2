//! Deadline-consistency rule shared by the task and project handlers.

use chrono::NaiveDateTime;

use crate::error::AppError;

/// Validates that a task's deadline does not exceed its project's deadline.
///
/// `task_id` is given when the check runs against an already-stored task
/// (e.g. while tightening a project deadline), so the error can name the
/// offending task.
pub fn check_deadline_consistency(
    task_deadline: Option<NaiveDateTime>,
    project_deadline: NaiveDateTime,
    task_id: Option<i64>,
) -> Result<(), AppError> {
    if let Some(task_deadline) = task_deadline {
        if task_deadline > project_deadline {
            let message = match task_id {
                Some(id) => format!(
                    "Task '{}' has a deadline later than the project deadline.",
                    id
                ),
                None => "Task deadline cannot be later than project deadline.".to_string(),
            };
            return Err(AppError::BadRequest(message));
        }
    }
    Ok(())
}
