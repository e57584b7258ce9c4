//! ProfileDirectory: the user records behind `GET /profile`.

use std::sync::Arc;

use payday_core::User;
use payday_session::SessionStore;

use crate::api::ApiClient;
use crate::errors::ApiError;

pub struct ProfileDirectory {
    api: ApiClient,
    session: Arc<SessionStore>,
}

impl ProfileDirectory {
    pub fn new(api: ApiClient, session: Arc<SessionStore>) -> Self {
        Self { api, session }
    }

    pub fn fetch(&self) -> Result<Vec<User>, ApiError> {
        let token = self.session.token();
        self.api.profiles(token.as_deref())
    }

    /// The record whose email exactly equals `email`.
    pub fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self.fetch()?.into_iter().find(|p| p.email == email))
    }
}
