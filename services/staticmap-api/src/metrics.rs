//! Request metrics.
//!
//! Recorded through the `metrics` facade; exported when a Prometheus
//! recorder is installed, no-ops otherwise.

use std::time::Duration;

use metrics::{counter, histogram};

pub fn record_request() {
    counter!("staticmap_requests_total").increment(1);
}

pub fn record_redirect() {
    counter!("staticmap_redirects_total").increment(1);
}

/// Count a failed request by [`map_common::MapError::kind`].
pub fn record_failure(kind: &'static str) {
    counter!("staticmap_failures_total", "kind" => kind).increment(1);
}

pub fn record_duration(elapsed: Duration) {
    histogram!("staticmap_request_duration_ms").record(elapsed.as_secs_f64() * 1000.0);
}
