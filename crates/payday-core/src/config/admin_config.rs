//! Who gets the admin entry point.

use serde::{Deserialize, Serialize};

/// How the admin menu decides whether the session user is an admin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRule {
    /// Trust the `isAdmin` flag on the session record.
    #[default]
    SessionFlag,
    /// Exact email match against `admin.allowlist`.
    Allowlist,
    /// Exact email match against an admin record from `GET /profile`.
    ProfileDirectory,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub rule: AdminRule,
    pub allowlist: Vec<String>,
}
