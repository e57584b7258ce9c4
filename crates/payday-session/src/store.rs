//! SessionStore: load, login, logout, observe.

use std::sync::{Arc, PoisonError, RwLock};

use crossbeam_channel::Receiver;
use payday_core::constants::{TOKEN_KEY, USER_KEY};
use payday_core::{KeyValueStore, StorageError, User};
use tracing::{debug, info, warn};

use crate::events::{SessionEvent, Subscribers};

#[derive(Debug, Clone, Default)]
struct SessionState {
    user: Option<User>,
    token: Option<String>,
}

/// The signed-in user, persisted under the `user` and `token` storage keys.
///
/// Reads never fail: anything unreadable in storage is an empty session.
/// Writes go to storage first and only then to memory, so a failed write
/// leaves the in-memory session unchanged.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    state: RwLock<SessionState>,
    subscribers: Subscribers,
}

impl SessionStore {
    /// Read the persisted session. Missing, unreadable or malformed data is
    /// logged and yields an empty session.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let user = match storage.get(USER_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Option<User>>(&raw) {
                Ok(user) => user,
                Err(e) => {
                    warn!(error = %e, "Stored session user is malformed, starting signed out");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Cannot read stored session, starting signed out");
                None
            }
        };
        let token = match storage.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!(error = %e, "Cannot read stored token");
                None
            }
        };
        debug!(
            signed_in = user.is_some(),
            has_token = token.is_some(),
            "Session loaded"
        );
        Self {
            storage,
            state: RwLock::new(SessionState { user, token }),
            subscribers: Subscribers::default(),
        }
    }

    /// Persist `user` with `token` and make them the current session.
    ///
    /// The pair is replaced as a whole: a `None` token removes any stored
    /// token rather than leaving the previous user's credential in place.
    /// The token is written first; if the user write then fails the
    /// previous token is put back, so storage never pairs a user with
    /// someone else's token.
    pub fn login(&self, user: User, token: Option<String>) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(&user)?;
        let token = token.filter(|t| !t.is_empty());
        let previous_token = self.token();

        self.write_token(token.as_deref())?;
        if let Err(e) = self.storage.set(USER_KEY, &encoded) {
            if let Err(restore) = self.write_token(previous_token.as_deref()) {
                warn!(error = %restore, "Cannot restore previous token after failed login");
            }
            return Err(e);
        }

        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state.user = Some(user.clone());
            state.token = token;
        }
        info!(user_id = %user.id, vip = user.is_vip, admin = user.is_admin, "Session started");
        self.subscribers.emit(SessionEvent::LoggedIn(user));
        Ok(())
    }

    /// Clear the session from storage and memory.
    ///
    /// Memory is cleared even if storage removal fails; the first storage
    /// error is returned afterwards.
    pub fn logout(&self) -> Result<(), StorageError> {
        let user_removed = self.storage.remove(USER_KEY);
        let token_removed = self.storage.remove(TOKEN_KEY);

        *self.state.write().unwrap_or_else(PoisonError::into_inner) = SessionState::default();
        info!("Session cleared");
        self.subscribers.emit(SessionEvent::LoggedOut);

        user_removed.and(token_removed)
    }

    /// Snapshot of the current user.
    pub fn current(&self) -> Option<User> {
        self.read().user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().user.is_some()
    }

    /// The current user's id, if signed in and the record carries a non-blank one.
    pub fn user_id(&self) -> Option<String> {
        self.read()
            .user
            .as_ref()
            .and_then(|u| u.user_id())
            .map(str::to_string)
    }

    /// Receive a [`SessionEvent`] for every subsequent login and logout.
    pub fn subscribe(&self) -> Receiver<SessionEvent> {
        self.subscribers.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn write_token(&self, token: Option<&str>) -> Result<(), StorageError> {
        match token {
            Some(token) => self.storage.set(TOKEN_KEY, token),
            None => self.storage.remove(TOKEN_KEY),
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read();
        f.debug_struct("SessionStore")
            .field("user", &state.user)
            .field("has_token", &state.token.is_some())
            .finish()
    }
}
