use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{rt, web, App, HttpServer};
use std::net::TcpListener;

use project_api::routes;

mod common;
use common::setup_pool;

// Boots a real server on a random port and exercises the public pages over
// HTTP, the way a browser or probe would.
#[test_log::test(actix_rt::test)]
async fn test_root_and_health_over_live_server() {
    let pool = setup_pool().await;

    // Find an available port
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener); // Drop the listener so the server can bind to it

    let server_pool = pool.clone();
    let _server_handle = rt::spawn(async move {
        HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(server_pool.clone()))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header()
                        .max_age(3600),
                )
                .wrap(Logger::default())
                .configure(routes::config)
        })
        .bind(("127.0.0.1", port))
        .unwrap_or_else(|_| panic!("Failed to bind to port {}", port))
        .run()
        .await
    });

    // Give the server a moment to start
    tokio::time::sleep(tokio::time::Duration::from_millis(200)).await;

    let client = reqwest::Client::new();
    let base_url = format!("http://127.0.0.1:{}", port);

    let resp = client
        .get(format!("{}/", base_url))
        .send()
        .await
        .expect("Failed to request root page");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let html = resp.text().await.expect("Failed to read root page body");
    assert!(html.contains("Task Management Tool"));
    assert!(html.contains("/api/v1/tasks"));

    let resp = client
        .get(format!("{}/health", base_url))
        .send()
        .await
        .expect("Failed to request health endpoint");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = resp.json().await.expect("Health body is not JSON");
    assert_eq!(body["status"], "OK");
}
