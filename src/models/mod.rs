pub mod datetime;
pub mod project;
pub mod task;

pub use project::{Project, ProjectDetail, ProjectInput, ProjectUpdate};
pub use task::{Task, TaskInput, TaskUpdate};

use serde::Deserialize;

/// Offset/limit query parameters shared by the list endpoints.
#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}
