use axum::body::Body;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use crate::shared::format::format_size;

/// Logs every HTTP request to the console:
/// time, duration (ms), response size, status, method and path.
///
/// The size comes from `Content-Length`; streamed bodies show `-`.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status();
    let size = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .map(format_size)
        .unwrap_or_else(|| "-".into());

    // cyan for success, yellow for everything else
    let color_code = if status.is_success() { "36" } else { "33" };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>9} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        size,
        status.as_u16(),
        method,
        path
    );

    if status.is_server_error() {
        tracing::error!("{} {} -> {}", method, path, status);
    }

    response
}
