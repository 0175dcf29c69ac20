//! Privilege policy.

use serde::{Deserialize, Serialize};
use shared_types::Actor;

/// Default administrator role.
pub const DEFAULT_ADMIN_ROLE: &str = "master_admin";

/// Decides whether an actor is privileged.
///
/// Privileged iff the identity equals the super-user identity or the role
/// equals the administrator role. Exact matches only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivilegePolicy {
    /// Identity always treated as privileged, if any
    pub super_user_identity: Option<String>,
    /// Role granting privilege
    pub admin_role: String,
}

impl Default for PrivilegePolicy {
    fn default() -> Self {
        Self {
            super_user_identity: None,
            admin_role: DEFAULT_ADMIN_ROLE.to_string(),
        }
    }
}

impl PrivilegePolicy {
    pub fn new(super_user_identity: Option<String>, admin_role: impl Into<String>) -> Self {
        Self {
            super_user_identity,
            admin_role: admin_role.into(),
        }
    }

    /// Defaults overridden by `ED_SUPER_USER` and `ED_ADMIN_ROLE`.
    pub fn from_env() -> Self {
        let mut policy = Self::default();
        if let Ok(identity) = std::env::var("ED_SUPER_USER") {
            if !identity.trim().is_empty() {
                policy.super_user_identity = Some(identity.trim().to_string());
            }
        }
        if let Ok(role) = std::env::var("ED_ADMIN_ROLE") {
            if !role.trim().is_empty() {
                policy.admin_role = role.trim().to_string();
            }
        }
        policy
    }

    pub fn is_privileged(&self, actor: &Actor) -> bool {
        let super_user = self
            .super_user_identity
            .as_deref()
            .is_some_and(|identity| identity == actor.identity);
        super_user || actor.role.as_deref() == Some(self.admin_role.as_str())
    }
}
