//! Configuration for the lifecycle engine

use crate::domain::code::CODE_PREFIX;
use crate::domain::privilege::PrivilegePolicy;
use serde::{Deserialize, Serialize};

/// Lifecycle configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LifecycleConfig {
    /// Who counts as privileged
    pub privilege: PrivilegePolicy,
    /// Prefix of generated article codes
    pub code_prefix: String,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            privilege: PrivilegePolicy::default(),
            code_prefix: CODE_PREFIX.to_string(),
        }
    }
}

impl LifecycleConfig {
    pub fn from_env() -> Self {
        Self {
            privilege: PrivilegePolicy::from_env(),
            ..Self::default()
        }
    }
}
