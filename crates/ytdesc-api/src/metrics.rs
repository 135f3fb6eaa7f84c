//! Prometheus metrics for the API server.

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "ytdesc_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "ytdesc_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "ytdesc_http_requests_in_flight";

    // Extraction metrics
    pub const LINKS_EXTRACTED_TOTAL: &str = "ytdesc_links_extracted_total";
}

/// Routes reported as-is; anything else is collapsed to keep label cardinality bounded.
const KNOWN_PATHS: &[&str] = &[
    "/get-description",
    "/extract-companies-links-txt",
    "/health",
    "/healthz",
    "/metrics",
];

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", sanitize_path(path).to_string()),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record links found in a description.
pub fn record_links_extracted(count: usize) {
    counter!(names::LINKS_EXTRACTED_TOTAL).increment(count as u64);
}

fn sanitize_path(path: &str) -> &str {
    KNOWN_PATHS
        .iter()
        .copied()
        .find(|known| *known == path)
        .unwrap_or("other")
}

/// Metrics middleware for HTTP requests.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);

    let response = next.run(request).await;

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    let status = response.status().as_u16();
    let duration = start.elapsed().as_secs_f64();

    record_http_request(&method, &path, status, duration);

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_path() {
        assert_eq!(sanitize_path("/get-description"), "/get-description");
        assert_eq!(sanitize_path("/healthz"), "/healthz");
        assert_eq!(sanitize_path("/wp-admin/setup.php"), "other");
        assert_eq!(sanitize_path("/get-description/extra"), "other");
    }
}
