//! # Runtime Configuration
//!
//! Unified configuration for the store adapter, the engines and telemetry.

use ed_01_entity_store::StoreConfig;
use ed_02_ordering::OrderingConfig;
use ed_03_lifecycle::LifecycleConfig;
use ed_04_bulk_operations::BulkConfig;
use editorial_telemetry::TelemetryConfig;

/// Complete runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Collection names and list sorting.
    pub store: StoreConfig,
    /// Reorder session behaviour.
    pub ordering: OrderingConfig,
    /// Privilege policy and article codes.
    pub lifecycle: LifecycleConfig,
    /// Bulk operation behaviour.
    pub bulk: BulkConfig,
    /// Logging and metrics.
    pub telemetry: TelemetryConfig,
}

impl RuntimeConfig {
    /// Every section loaded from its environment variables.
    pub fn from_env() -> Self {
        Self {
            store: StoreConfig::from_env(),
            ordering: OrderingConfig::from_env(),
            lifecycle: LifecycleConfig::from_env(),
            bulk: BulkConfig::default(),
            telemetry: TelemetryConfig::from_env(),
        }
    }
}
