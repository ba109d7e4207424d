// src/handlers/docs.rs
use axum::{response::Html, routing::get, Router};

pub const SERVICE_TITLE: &str = "AI Wellness Assistant API";

pub fn docs_routes() -> Router {
    Router::new().route("/api/docs", get(api_documentation))
}

async fn api_documentation() -> Html<String> {
    let html = r###"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{TITLE}} - Documentation</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 960px; margin: 0 auto; padding: 20px; line-height: 1.6; }
        .header { background: linear-gradient(135deg, #43cea2 0%, #185a9d 100%); color: white; padding: 2rem; border-radius: 10px; margin-bottom: 2rem; }
        .endpoint { background: #f8f9fa; border-left: 4px solid #007bff; padding: 1rem; margin: 1rem 0; border-radius: 5px; }
        .method { display: inline-block; padding: 0.25rem 0.5rem; border-radius: 3px; color: white; font-weight: bold; margin-right: 0.5rem; }
        .get { background: #28a745; }
        .post { background: #007bff; }
        code { background: #e9ecef; padding: 0.2rem 0.4rem; border-radius: 3px; }
        .note { background: #fff3cd; border: 1px solid #ffeaa7; padding: 1rem; border-radius: 5px; margin: 1rem 0; }
    </style>
</head>
<body>
    <div class="header">
        <h1>{{TITLE}}</h1>
        <p>Version {{VERSION}}. Keyword-matched wellness suggestions.</p>
    </div>

    <div class="endpoint">
        <span class="method get">GET</span>
        <strong>/health</strong><br>
        Service liveness check<br>
        <strong>Returns:</strong> <code>{"status": "healthy", "message": "AI Wellness Assistant is running"}</code>
    </div>

    <div class="endpoint">
        <span class="method post">POST</span>
        <strong>/chat</strong><br>
        Ask a wellness question<br>
        <strong>Body:</strong> <code>{"question": "How can I sleep better?"}</code><br>
        <strong>Returns:</strong> <code>{"answer": "...", "error": null}</code>
    </div>

    <div class="note">
        <strong>/chat always answers with HTTP 200.</strong><br>
        Check the <code>error</code> field to detect a failure; on failure <code>answer</code> is empty.
    </div>

    <p>Topics: stress, sleep, exercise, nutrition, meditation, anxiety, depression. Anything else gets a general suggestion.</p>
</body>
</html>
"###;

    Html(
        html.replace("{{TITLE}}", SERVICE_TITLE)
            .replace("{{VERSION}}", env!("CARGO_PKG_VERSION")),
    )
}
