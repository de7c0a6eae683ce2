use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    deadline::check_deadline_consistency,
    error::AppError,
    models::{Pagination, Project, ProjectDetail, ProjectInput, ProjectUpdate, Task},
};

async fn fetch_project(pool: &SqlitePool, id: i64) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT id, title, deadline FROM projects WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

async fn fetch_project_tasks(pool: &SqlitePool, project_id: i64) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "SELECT id, title, description, deadline, completed, project_id \
         FROM tasks WHERE project_id = ? ORDER BY id",
    )
    .bind(project_id)
    .fetch_all(pool)
    .await
}

/// Retrieves a list of all projects with pagination.
///
/// Each project embeds its attached tasks.
///
/// ## Query Parameters:
/// - `skip` (optional, default 0): number of projects to skip.
/// - `limit` (optional, default 100): maximum number of projects to return.
#[get("")]
pub async fn get_projects(
    pool: web::Data<SqlitePool>,
    page: web::Query<Pagination>,
) -> Result<impl Responder, AppError> {
    let projects = sqlx::query_as::<_, Project>(
        "SELECT id, title, deadline FROM projects ORDER BY id LIMIT ? OFFSET ?",
    )
    .bind(page.limit)
    .bind(page.skip)
    .fetch_all(&**pool)
    .await?;

    let mut details = Vec::with_capacity(projects.len());
    for project in projects {
        let tasks = fetch_project_tasks(&pool, project.id).await?;
        details.push(ProjectDetail::new(project, tasks));
    }

    Ok(HttpResponse::Ok().json(details))
}

/// Retrieves a project by its ID, with its tasks embedded.
///
/// Responds `404 Not Found` if the project does not exist.
#[get("/{id}")]
pub async fn get_project(
    pool: web::Data<SqlitePool>,
    project_id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let id = project_id.into_inner();

    let project = fetch_project(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".into()))?;
    let tasks = fetch_project_tasks(&pool, id).await?;

    Ok(HttpResponse::Ok().json(ProjectDetail::new(project, tasks)))
}

/// Creates a new project.
///
/// ## Responses:
/// - `201 Created`: the created project (with an empty task list).
/// - `422 Unprocessable Entity`: if input validation fails.
#[post("")]
pub async fn create_project(
    pool: web::Data<SqlitePool>,
    project_data: web::Json<ProjectInput>,
) -> Result<impl Responder, AppError> {
    project_data.validate()?;

    let project = sqlx::query_as::<_, Project>(
        "INSERT INTO projects (title, deadline) VALUES (?, ?) RETURNING id, title, deadline",
    )
    .bind(&project_data.title)
    .bind(project_data.deadline)
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Created().json(ProjectDetail::new(project, Vec::new())))
}

/// Updates an existing project by its ID. Absent fields are left unchanged.
///
/// When the deadline moves, every attached task is re-checked against the
/// new value; a task with a later deadline rejects the update.
///
/// ## Responses:
/// - `200 OK`: the updated project with its tasks embedded.
/// - `400 Bad Request`: if the new deadline is earlier than an attached task's deadline.
/// - `404 Not Found`: if the project does not exist.
/// - `422 Unprocessable Entity`: if input validation fails.
#[put("/{id}")]
pub async fn update_project(
    pool: web::Data<SqlitePool>,
    project_id: web::Path<i64>,
    project_update: web::Json<ProjectUpdate>,
) -> Result<impl Responder, AppError> {
    project_update.validate()?;
    let id = project_id.into_inner();
    let update = project_update.into_inner();

    let project = fetch_project(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".into()))?;
    let tasks = fetch_project_tasks(&pool, id).await?;

    if let Some(new_deadline) = update.deadline {
        for task in &tasks {
            check_deadline_consistency(task.deadline, new_deadline, Some(task.id))?;
        }
    }

    let title = update.title.unwrap_or(project.title);
    let deadline = update.deadline.unwrap_or(project.deadline);

    let updated = sqlx::query_as::<_, Project>(
        "UPDATE projects SET title = ?, deadline = ? WHERE id = ? RETURNING id, title, deadline",
    )
    .bind(&title)
    .bind(deadline)
    .bind(id)
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(ProjectDetail::new(updated, tasks)))
}

/// Deletes a project by its ID.
///
/// Attached tasks survive the deletion with their `project_id` cleared.
/// Responds `204 No Content` on success, `404 Not Found` otherwise.
#[delete("/{id}")]
pub async fn delete_project(
    pool: web::Data<SqlitePool>,
    project_id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let result = sqlx::query("DELETE FROM projects WHERE id = ?")
        .bind(project_id.into_inner())
        .execute(&**pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Project not found".into()));
    }

    Ok(HttpResponse::NoContent().finish())
}

/// Retrieves the tasks attached to a specific project, with pagination.
///
/// Responds `404 Not Found` if the project does not exist.
#[get("/{id}/tasks")]
pub async fn get_project_tasks(
    pool: web::Data<SqlitePool>,
    project_id: web::Path<i64>,
    page: web::Query<Pagination>,
) -> Result<impl Responder, AppError> {
    let id = project_id.into_inner();

    fetch_project(&pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

    let tasks = sqlx::query_as::<_, Task>(
        "SELECT id, title, description, deadline, completed, project_id \
         FROM tasks WHERE project_id = ? ORDER BY id LIMIT ? OFFSET ?",
    )
    .bind(id)
    .bind(page.limit)
    .bind(page.skip)
    .fetch_all(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(tasks))
}
