//! AdminMenu: who sees the admin entry point.

use payday_client::ProfileDirectory;
use payday_core::config::{AdminConfig, AdminRule};
use payday_core::User;
use tracing::debug;

use crate::errors::AdminError;

/// Applies the configured [`AdminRule`] to the session user.
///
/// No session never gets the menu, whatever the rule. The profile-directory
/// rule needs a [`ProfileDirectory`]; without one it denies.
pub struct AdminMenu {
    rule: AdminRule,
    allowlist: Vec<String>,
    profiles: Option<ProfileDirectory>,
}

impl AdminMenu {
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            rule: config.rule,
            allowlist: config.allowlist.clone(),
            profiles: None,
        }
    }

    pub fn with_profiles(mut self, profiles: ProfileDirectory) -> Self {
        self.profiles = Some(profiles);
        self
    }

    pub fn rule(&self) -> AdminRule {
        self.rule
    }

    pub fn is_visible(&self, session: Option<&User>) -> Result<bool, AdminError> {
        let Some(user) = session else {
            return Ok(false);
        };
        let visible = match self.rule {
            AdminRule::SessionFlag => user.is_admin,
            AdminRule::Allowlist => {
                !user.email.is_empty() && self.allowlist.iter().any(|e| *e == user.email)
            }
            AdminRule::ProfileDirectory => match &self.profiles {
                Some(profiles) if !user.email.is_empty() => profiles
                    .find_by_email(&user.email)?
                    .is_some_and(|profile| profile.is_admin),
                _ => false,
            },
        };
        debug!(rule = ?self.rule, visible, "Admin menu checked");
        Ok(visible)
    }
}
