use std::time::Instant;

use axum::response::Response;
use tracing::info;

pub async fn trace_middleware(
    request: axum::http::Request<axum::body::Body>,
    next: axum::middleware::Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        "{} {} -> {} ({:?})",
        method,
        path,
        response.status(),
        started.elapsed()
    );

    response
}
