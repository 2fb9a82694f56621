use axum::{http::StatusCode, response::Html};

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>HotMessCoach</title></head>
<body>
<h2>HotMessCoach API</h2>
<p>POST a JSON body to <code>/chat</code>:</p>
<pre>{
  "message": "I feel like a hot mess today..."
}</pre>
<p>The reply comes back as <code>{"reply": "..."}</code>.</p>
<p>Or open <a href="/docs">/docs</a> for interactive Swagger UI.</p>
</body>
</html>
"#;

#[utoipa::path(
    get,
    path = "/",
    tag = "pages",
    responses(
        (status = 200, description = "Landing page", content_type = "text/html", body = String)
    )
)]
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[utoipa::path(
    get,
    path = "/favicon.ico",
    tag = "pages",
    responses((status = 204, description = "No icon"))
)]
pub async fn favicon_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "pages",
    responses((status = 200, description = "Service is up", body = String))
)]
pub async fn health_handler() -> &'static str {
    "OK"
}
