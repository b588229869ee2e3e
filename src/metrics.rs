//! Prometheus metrics

use anyhow::Result;
use metrics_exporter_prometheus::PrometheusBuilder;

/// Setup Prometheus metrics exporter
/// Returns a handle that can be used to retrieve metrics
pub fn setup_metrics() -> Result<metrics_exporter_prometheus::PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus exporter: {}", e))?;

    tracing::info!("Prometheus metrics exporter installed");

    Ok(handle)
}

/// Record an incoming parse request
pub fn record_parse_request() {
    metrics::counter!("hubparse_parse_requests_total").increment(1);
}

/// Record a request rejected because no model ID could be extracted
pub fn record_invalid_url() {
    metrics::counter!("hubparse_invalid_url_total").increment(1);
}

/// Record a recovered hub lookup failure
///
/// `source` is one of "registry", "config", "page".
pub fn record_lookup_failure(source: &'static str) {
    metrics::counter!("hubparse_lookup_failures_total",
        "source" => source
    )
    .increment(1);
}
