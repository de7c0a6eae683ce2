use actix_web::{get, http::header::ContentType, HttpRequest, HttpResponse, Responder};

/// Serves the root HTML page for the Task Management Tool.
///
/// Returns a small landing page with the service title and an overview of
/// the available endpoints.
#[get("/")]
pub async fn root(req: HttpRequest) -> impl Responder {
    let info = req.connection_info();
    let base_url = format!("{}://{}", info.scheme(), info.host());

    let page = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Task Management Tool - Home</title>
    <style>
        body {{
            font-family: sans-serif;
            padding: 3rem;
            background-color: #eef2f5;
            color: #34495e;
        }}
        .container {{
            background-color: #ffffff;
            border-radius: 12px;
            box-shadow: 0 4px 20px rgba(0, 0, 0, 0.08);
            padding: 2.5rem 3rem;
            max-width: 700px;
            margin: 0 auto;
        }}
        h1 {{ color: #1a202c; }}
        code {{ background-color: #eef2f5; padding: 0.15rem 0.4rem; border-radius: 4px; }}
        a {{ color: #4299e1; font-weight: 600; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>&#129520; Task Management Tool</h1>
        <p>A REST API for managing projects and their tasks.</p>
        <h2>Endpoints</h2>
        <ul>
            <li><a href="{base_url}/health">{base_url}/health</a> &mdash; service health</li>
            <li><code>{base_url}/api/v1/projects</code> &mdash; project CRUD, <code>/{{id}}/tasks</code></li>
            <li><code>{base_url}/api/v1/tasks</code> &mdash; task CRUD, <code>/deadlines</code>,
                <code>/{{id}}/link-project/{{project_id}}</code></li>
        </ul>
    </div>
</body>
</html>
"#
    );

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page)
}
