use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::datetime;
use super::task::Task;

/// Represents a project row as stored in the database.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Project {
    /// Unique identifier for the project.
    pub id: i64,
    /// The title of the project.
    pub title: String,
    /// The project deadline (naive UTC). Tasks attached to this project may
    /// not have a deadline later than this.
    pub deadline: NaiveDateTime,
}

/// API representation of a project: the row plus its attached tasks.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub id: i64,
    pub title: String,
    pub deadline: NaiveDateTime,
    pub tasks: Vec<Task>,
}

impl ProjectDetail {
    pub fn new(project: Project, tasks: Vec<Task>) -> Self {
        Self {
            id: project.id,
            title: project.title,
            deadline: project.deadline,
            tasks,
        }
    }
}

/// Input structure for creating a project.
#[derive(Debug, Deserialize, Validate)]
pub struct ProjectInput {
    /// The title of the project. Must be between 1 and 200 characters.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// The project deadline. Required; offset-carrying input is normalized
    /// to naive UTC.
    #[serde(deserialize_with = "datetime::deserialize")]
    pub deadline: NaiveDateTime,
}

/// Input structure for updating a project. Absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct ProjectUpdate {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "datetime::deserialize_option")]
    pub deadline: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_input_validation() {
        let input: ProjectInput =
            serde_json::from_str(r#"{"title": "Website relaunch", "deadline": "2030-06-01T00:00:00"}"#)
                .unwrap();
        assert!(input.validate().is_ok());

        let empty_title: ProjectInput =
            serde_json::from_str(r#"{"title": "", "deadline": "2030-06-01T00:00:00"}"#).unwrap();
        assert!(empty_title.validate().is_err());
    }

    #[test]
    fn test_project_input_requires_deadline() {
        let result = serde_json::from_str::<ProjectInput>(r#"{"title": "No deadline"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_project_update_fields_are_optional() {
        let update: ProjectUpdate = serde_json::from_str(r#"{}"#).unwrap();
        assert!(update.title.is_none());
        assert!(update.deadline.is_none());
        assert!(update.validate().is_ok());

        let update: ProjectUpdate =
            serde_json::from_str(r#"{"deadline": "2030-06-01T00:00:00+02:00"}"#).unwrap();
        let deadline = update.deadline.unwrap();
        // Offset normalized away: 00:00 at +02:00 is 22:00 the previous day.
        assert_eq!(deadline.format("%Y-%m-%dT%H:%M:%S").to_string(), "2030-05-31T22:00:00");
    }
}
