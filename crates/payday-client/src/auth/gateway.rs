//! AuthGateway: validate, submit, hand the result to the session store.

use std::sync::Arc;

use payday_core::constants::{LOGIN_SUCCESS_MESSAGE, SIGNUP_SUCCESS_MESSAGE};
use payday_core::{Notice, User};
use payday_session::SessionStore;
use tracing::{info, warn};

use super::validation::{validate_login, validate_signup};
use super::{LoginForm, SignupForm};
use crate::api::{ApiClient, AuthPayload};
use crate::busy::BusyFlag;
use crate::errors::AuthError;

/// A completed login or signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub user: User,
    pub notice: Notice,
}

/// Issues login and signup requests and updates the session on success.
///
/// Login and signup share one busy flag: they are the same submit button in
/// two modes. A submit while a request is in flight returns `AuthError::Busy`
/// without touching the network.
pub struct AuthGateway {
    api: ApiClient,
    session: Arc<SessionStore>,
    busy: BusyFlag,
}

impl AuthGateway {
    pub fn new(api: ApiClient, session: Arc<SessionStore>) -> Self {
        Self {
            api,
            session,
            busy: BusyFlag::new(),
        }
    }

    pub fn login(&self, email: &str, password: &str) -> Result<AuthOutcome, AuthError> {
        let _guard = self
            .busy
            .try_acquire()
            .ok_or(AuthError::Busy { action: "login" })?;

        let form = LoginForm::new(email, password);
        validate_login(&form).map_err(AuthError::Validation)?;

        let payload = self.api.login(&form).inspect_err(|e| {
            warn!(error = %e, "Login failed");
        })?;
        self.establish(payload, LOGIN_SUCCESS_MESSAGE)
    }

    pub fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<AuthOutcome, AuthError> {
        let _guard = self
            .busy
            .try_acquire()
            .ok_or(AuthError::Busy { action: "signup" })?;

        let form = SignupForm::new(name, email, password, confirm_password);
        validate_signup(&form).map_err(AuthError::Validation)?;

        let payload = self.api.signup(&form).inspect_err(|e| {
            warn!(error = %e, "Signup failed");
        })?;
        self.establish(payload, SIGNUP_SUCCESS_MESSAGE)
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    fn establish(&self, payload: AuthPayload, greeting: &str) -> Result<AuthOutcome, AuthError> {
        let AuthPayload { user, token } = payload;
        self.session.login(user.clone(), token)?;
        info!(user_id = %user.id, "Authenticated");
        Ok(AuthOutcome {
            user,
            notice: Notice::success(greeting),
        })
    }
}
