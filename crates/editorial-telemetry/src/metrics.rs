//! Prometheus metrics for the editorial engines.
//!
//! All metrics follow the naming convention: `ed_<area>_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts,
    Registry, TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // ENTITY STORE
    // =========================================================================

    /// Store requests by operation (list/list_by_ids/create/update/delete)
    /// and outcome (ok/error)
    pub static ref STORE_CALLS: IntCounterVec = IntCounterVec::new(
        Opts::new("ed_store_calls_total", "Entity store requests"),
        &["operation", "outcome"]
    ).expect("metric creation failed");

    /// Store request latency
    pub static ref STORE_CALL_DURATION: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "ed_store_call_duration_seconds",
            "Time spent waiting on the entity store"
        ).buckets(exponential_buckets(0.0005, 2.0, 14).expect("bucket layout")),
        &["operation"]
    ).expect("metric creation failed");

    /// Stored records left out of a listing because they did not decode
    pub static ref RECORDS_SKIPPED: IntCounter = IntCounter::new(
        "ed_store_records_skipped_total",
        "Malformed records skipped while listing"
    ).expect("metric creation failed");

    /// Article cache invalidations
    pub static ref CACHE_INVALIDATIONS: IntCounter = IntCounter::new(
        "ed_cache_invalidations_total",
        "Article cache invalidations"
    ).expect("metric creation failed");

    // =========================================================================
    // ENGINES
    // =========================================================================

    /// Reorder commits by outcome (ok/partial/empty)
    pub static ref REORDER_COMMITS: IntCounterVec = IntCounterVec::new(
        Opts::new("ed_reorder_commits_total", "Reorder session commits"),
        &["outcome"]
    ).expect("metric creation failed");

    /// Lifecycle mutations by operation and effective status
    pub static ref LIFECYCLE_TRANSITIONS: IntCounterVec = IntCounterVec::new(
        Opts::new("ed_lifecycle_transitions_total", "Single-article lifecycle mutations"),
        &["operation", "status"]
    ).expect("metric creation failed");

    /// Bulk operations by action (publish/delete) and outcome
    pub static ref BULK_OPERATIONS: IntCounterVec = IntCounterVec::new(
        Opts::new("ed_bulk_operations_total", "Bulk publish/delete runs"),
        &["action", "outcome"]
    ).expect("metric creation failed");

    /// Errors surfaced to the operator, by kind
    pub static ref ENGINE_ERRORS: IntCounterVec = IntCounterVec::new(
        Opts::new("ed_engine_errors_total", "Errors surfaced by the engines"),
        &["kind"]
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(STORE_CALLS.clone()),
        Box::new(STORE_CALL_DURATION.clone()),
        Box::new(RECORDS_SKIPPED.clone()),
        Box::new(CACHE_INVALIDATIONS.clone()),
        Box::new(REORDER_COMMITS.clone()),
        Box::new(LIFECYCLE_TRANSITIONS.clone()),
        Box::new(BULK_OPERATIONS.clone()),
        Box::new(ENGINE_ERRORS.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }
    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Record one store request.
pub fn record_store_call(operation: &str, ok: bool, seconds: f64) {
    let outcome = if ok { "ok" } else { "error" };
    STORE_CALLS.with_label_values(&[operation, outcome]).inc();
    STORE_CALL_DURATION
        .with_label_values(&[operation])
        .observe(seconds);
}
