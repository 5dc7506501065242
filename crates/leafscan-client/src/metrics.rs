//! Inference request metrics.
//!
//! Recorded through the `metrics` facade; they are dropped unless the host
//! application installs a recorder.

use std::time::Duration;

use metrics::{counter, histogram};

/// Metric name constants for consistency.
pub mod names {
    /// Total submissions by endpoint and outcome.
    pub const REQUESTS_TOTAL: &str = "leafscan_requests_total";

    /// Submission latency in seconds by endpoint.
    pub const LATENCY_SECONDS: &str = "leafscan_request_latency_seconds";
}

/// Record metrics for a finished submission. `outcome` is `"ok"` or an
/// error kind.
pub fn record_request(endpoint: &str, outcome: &str, elapsed: Duration) {
    counter!(
        names::REQUESTS_TOTAL,
        "endpoint" => endpoint.to_string(),
        "outcome" => outcome.to_string()
    )
    .increment(1);

    histogram!(
        names::LATENCY_SECONDS,
        "endpoint" => endpoint.to_string()
    )
    .record(elapsed.as_secs_f64());
}
