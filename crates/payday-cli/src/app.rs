//! Wiring: one session store and one API client shared by every component.

use std::sync::Arc;

use anyhow::Context;
use payday_client::{ApiClient, HttpClient};
use payday_core::{KeyValueStore, PaydayConfig};
use payday_session::{open_storage, MemoryStore, SessionStore};
use tracing::debug;

pub struct App {
    pub config: PaydayConfig,
    pub session: Arc<SessionStore>,
    pub api: ApiClient,
    pub json: bool,
}

impl App {
    pub fn build(config: PaydayConfig, ephemeral: bool, json: bool) -> anyhow::Result<Self> {
        let storage: Arc<dyn KeyValueStore> = if ephemeral {
            Arc::new(MemoryStore::new())
        } else {
            open_storage(&config.storage)
        };
        let session = Arc::new(SessionStore::load(storage));
        let http = HttpClient::new(&config.api).context("cannot build HTTP client")?;
        debug!(base_url = http.base_url(), ephemeral, "Client ready");
        Ok(Self {
            api: ApiClient::new(Arc::new(http)),
            config,
            session,
            json,
        })
    }
}
