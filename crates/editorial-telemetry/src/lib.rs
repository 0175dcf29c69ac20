//! # Editorial Telemetry
//!
//! Logging and metrics for the editorial engines.
//!
//! ## Components
//!
//! - **Logs**: `tracing-subscriber` registry with an `EnvFilter` and a pretty
//!   or JSON `fmt` layer
//! - **Metrics**: Prometheus counters and histograms in a global registry
//!
//! ## Usage
//!
//! ```rust,ignore
//! use editorial_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(&TelemetryConfig::from_env())?;
//!     // Engines now log through tracing and record into the registry
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ED_SERVICE_NAME` | `editorial-console` | Service name in logs |
//! | `ED_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter |
//! | `ED_CONSOLE_OUTPUT` | `true` | Write logs to the console |
//! | `ED_JSON_LOGS` | `false` (`true` in containers) | JSON log lines |

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::init_logging;
pub use metrics::{
    encode_metrics, record_store_call, register_metrics, BULK_OPERATIONS, CACHE_INVALIDATIONS,
    ENGINE_ERRORS, LIFECYCLE_TRANSITIONS, RECORDS_SKIPPED, REORDER_COMMITS, STORE_CALLS,
    STORE_CALL_DURATION,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Register metrics and install the logging subscriber.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    register_metrics()?;
    init_logging(config)
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}
