//! TipsFeed: fetch the current tips snapshot.

use std::sync::Arc;

use payday_access::{partition_tips, TipSections};
use payday_session::SessionStore;
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::busy::BusyFlag;
use crate::errors::FeedError;

/// Loads tips with the session's bearer token, when there is one, and splits
/// them into free and VIP sections.
///
/// The backend may already withhold VIP fields from unauthenticated callers;
/// the visibility policy still applies to whatever comes back.
pub struct TipsFeed {
    api: ApiClient,
    session: Arc<SessionStore>,
    loading: BusyFlag,
}

impl TipsFeed {
    pub fn new(api: ApiClient, session: Arc<SessionStore>) -> Self {
        Self {
            api,
            session,
            loading: BusyFlag::new(),
        }
    }

    pub fn fetch(&self) -> Result<TipSections, FeedError> {
        let _guard = self.loading.try_acquire().ok_or(FeedError::Busy)?;
        let token = self.session.token();
        let tips = self
            .api
            .tips(token.as_deref())
            .inspect_err(|e| warn!(error = %e, "Cannot load tips"))?;
        let sections = partition_tips(tips);
        debug!(
            free = sections.free.len(),
            vip = sections.vip.len(),
            authenticated = token.is_some(),
            "Tips loaded"
        );
        Ok(sections)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_busy()
    }
}
