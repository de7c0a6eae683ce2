use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    deadline::check_deadline_consistency,
    error::AppError,
    models::{Pagination, Project, Task, TaskInput, TaskUpdate},
};

const TASK_COLUMNS: &str = "id, title, description, deadline, completed, project_id";

async fn fetch_task(pool: &SqlitePool, id: i64) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "SELECT id, title, description, deadline, completed, project_id FROM tasks WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

async fn fetch_project(pool: &SqlitePool, id: i64) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT id, title, deadline FROM projects WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Retrieves a list of all tasks with pagination.
///
/// ## Query Parameters:
/// - `skip` (optional, default 0): number of tasks to skip.
/// - `limit` (optional, default 100): maximum number of tasks to return.
#[get("")]
pub async fn get_tasks(
    pool: web::Data<SqlitePool>,
    page: web::Query<Pagination>,
) -> Result<impl Responder, AppError> {
    let sql = format!("SELECT {} FROM tasks ORDER BY id LIMIT ? OFFSET ?", TASK_COLUMNS);
    let tasks = sqlx::query_as::<_, Task>(&sql)
        .bind(page.limit)
        .bind(page.skip)
        .fetch_all(&**pool)
        .await?;

    Ok(HttpResponse::Ok().json(tasks))
}

/// Retrieves tasks that have a defined deadline, with pagination.
#[get("/deadlines")]
pub async fn get_tasks_with_deadlines(
    pool: web::Data<SqlitePool>,
    page: web::Query<Pagination>,
) -> Result<impl Responder, AppError> {
    let sql = format!(
        "SELECT {} FROM tasks WHERE deadline IS NOT NULL ORDER BY id LIMIT ? OFFSET ?",
        TASK_COLUMNS
    );
    let tasks = sqlx::query_as::<_, Task>(&sql)
        .bind(page.limit)
        .bind(page.skip)
        .fetch_all(&**pool)
        .await?;

    Ok(HttpResponse::Ok().json(tasks))
}

/// Retrieves a task by its ID.
///
/// Responds `404 Not Found` if the task does not exist.
#[get("/{id}")]
pub async fn get_task(
    pool: web::Data<SqlitePool>,
    task_id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let task = fetch_task(&pool, task_id.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    Ok(HttpResponse::Ok().json(task))
}

/// Creates a new task.
///
/// If a project ID is provided, the project must exist and the task's
/// deadline must not exceed the project's deadline.
///
/// ## Responses:
/// - `201 Created`: the created `Task` as JSON.
/// - `400 Bad Request`: if the task's deadline is after the project's deadline.
/// - `404 Not Found`: if the referenced project does not exist.
/// - `422 Unprocessable Entity`: if input validation fails.
#[post("")]
pub async fn create_task(
    pool: web::Data<SqlitePool>,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;
    let input = task_data.into_inner();

    if let Some(project_id) = input.project_id {
        let project = fetch_project(&pool, project_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

        check_deadline_consistency(input.deadline, project.deadline, None)?;
    }

    let sql = format!(
        "INSERT INTO tasks (title, description, deadline, completed, project_id) \
         VALUES (?, ?, ?, ?, ?) RETURNING {}",
        TASK_COLUMNS
    );
    let task = sqlx::query_as::<_, Task>(&sql)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.deadline)
        .bind(input.completed)
        .bind(input.project_id)
        .fetch_one(&**pool)
        .await?;

    Ok(HttpResponse::Created().json(task))
}

/// Updates an existing task by its ID. Absent fields are left unchanged.
///
/// The effective (post-update) project and deadline are validated: the
/// target project must exist and the deadline rule must hold against it.
///
/// ## Responses:
/// - `200 OK`: the updated `Task` as JSON.
/// - `400 Bad Request`: if the effective deadline is later than the project's deadline.
/// - `404 Not Found`: if the task or the target project does not exist.
/// - `422 Unprocessable Entity`: if input validation fails.
#[put("/{id}")]
pub async fn update_task(
    pool: web::Data<SqlitePool>,
    task_id: web::Path<i64>,
    task_update: web::Json<TaskUpdate>,
) -> Result<impl Responder, AppError> {
    task_update.validate()?;
    let id = task_id.into_inner();
    let update = task_update.into_inner();

    let task = fetch_task(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    let new_project_id = update.project_id.or(task.project_id);
    let new_deadline = update.deadline.or(task.deadline);

    if let Some(project_id) = new_project_id {
        let project = fetch_project(&pool, project_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

        check_deadline_consistency(new_deadline, project.deadline, None)?;
    }

    let title = update.title.unwrap_or(task.title);
    let description = update.description.or(task.description);
    let completed = update.completed.unwrap_or(task.completed);

    let sql = format!(
        "UPDATE tasks SET title = ?, description = ?, deadline = ?, completed = ?, project_id = ? \
         WHERE id = ? RETURNING {}",
        TASK_COLUMNS
    );
    let updated = sqlx::query_as::<_, Task>(&sql)
        .bind(&title)
        .bind(&description)
        .bind(new_deadline)
        .bind(completed)
        .bind(new_project_id)
        .bind(id)
        .fetch_one(&**pool)
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Deletes a task by its ID.
///
/// Responds `204 No Content` on success, `404 Not Found` otherwise.
#[delete("/{id}")]
pub async fn delete_task(
    pool: web::Data<SqlitePool>,
    task_id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
        .bind(task_id.into_inner())
        .execute(&**pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Task not found".into()));
    }

    Ok(HttpResponse::NoContent().finish())
}

/// Links a task to a project.
///
/// Validates that both the task and project exist (task first), and that
/// the task's deadline does not exceed the project's deadline.
///
/// ## Responses:
/// - `200 OK`: the updated `Task` with the linked project.
/// - `400 Bad Request`: if the task's deadline is later than the project's deadline.
/// - `404 Not Found`: if the task or the project does not exist.
#[post("/{task_id}/link-project/{project_id}")]
pub async fn link_task_to_project(
    pool: web::Data<SqlitePool>,
    path: web::Path<(i64, i64)>,
) -> Result<impl Responder, AppError> {
    let (task_id, project_id) = path.into_inner();

    let task = fetch_task(&pool, task_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    let project = fetch_project(&pool, project_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

    check_deadline_consistency(task.deadline, project.deadline, None)?;

    let sql = format!(
        "UPDATE tasks SET project_id = ? WHERE id = ? RETURNING {}",
        TASK_COLUMNS
    );
    let linked = sqlx::query_as::<_, Task>(&sql)
        .bind(project_id)
        .bind(task_id)
        .fetch_one(&**pool)
        .await?;

    Ok(HttpResponse::Ok().json(linked))
}
