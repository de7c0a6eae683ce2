pub mod health;
pub mod meta;
pub mod projects;
pub mod tasks;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(meta::root)
        .service(health::health)
        .service(
            web::scope("/api/v1/projects")
                .service(projects::get_projects)
                .service(projects::create_project)
                .service(projects::get_project)
                .service(projects::update_project)
                .service(projects::delete_project)
                .service(projects::get_project_tasks),
        )
        .service(
            web::scope("/api/v1/tasks")
                .service(tasks::get_tasks)
                .service(tasks::create_task)
                // Registered before `/{id}` so the literal segment wins.
                .service(tasks::get_tasks_with_deadlines)
                .service(tasks::get_task)
                .service(tasks::update_task)
                .service(tasks::delete_task)
                .service(tasks::link_task_to_project),
        );
}
