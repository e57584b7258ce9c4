//! Test fixtures for the Payday workspace.
//!
//! - [`StubTransport`]: scripted responses per path, records every request
//! - [`BlockingTransport`]: holds a request open until released, for busy-flag tests
//! - sample users, tips and session helpers

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crossbeam_channel::{Receiver, Sender};
use payday_client::transport::{ApiRequest, ApiResponse, HttpTransport};
use payday_client::{ApiClient, TransportError};
use payday_core::constants::{TOKEN_KEY, USER_KEY};
use payday_core::{KeyValueStore, User};
use payday_session::{MemoryStore, SessionStore};
use serde_json::{json, Value};

// ─── Stub transport ──────────────────────────────────────────────────────────

type Scripted = Result<ApiResponse, TransportError>;

/// Answers requests from a per-path script. The last scripted answer for a
/// path repeats; unscripted paths get a 404 with a `message` body.
#[derive(Default)]
pub struct StubTransport {
    routes: Mutex<HashMap<String, Vec<Scripted>>>,
    calls: Mutex<Vec<ApiRequest>>,
}

impl StubTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, path: &str, status: u16, body: Value) -> &Self {
        self.script(path, Ok(ApiResponse::new(status, body.to_string())))
    }

    pub fn respond_raw(&self, path: &str, status: u16, body: &str) -> &Self {
        self.script(path, Ok(ApiResponse::new(status, body)))
    }

    pub fn fail(&self, path: &str, error: TransportError) -> &Self {
        self.script(path, Err(error))
    }

    fn script(&self, path: &str, answer: Scripted) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push(answer);
        self
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_to(&self, path: &str) -> Vec<ApiRequest> {
        self.calls()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }
}

impl HttpTransport for StubTransport {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        self.calls.lock().unwrap().push(request.clone());
        let mut routes = self.routes.lock().unwrap();
        match routes.get_mut(&request.path) {
            Some(script) if script.len() > 1 => script.remove(0),
            Some(script) if !script.is_empty() => script[0].clone(),
            _ => Ok(ApiResponse::new(
                404,
                json!({ "message": format!("no stub for {}", request.path) }).to_string(),
            )),
        }
    }
}

// ─── Blocking transport ──────────────────────────────────────────────────────

/// Signals `entered` when a request arrives, then waits on `release` before
/// answering with `response`.
pub struct BlockingTransport {
    entered: Sender<ApiRequest>,
    release: Receiver<()>,
    response: ApiResponse,
}

/// Test-side handles for a [`BlockingTransport`].
pub struct BlockingHandles {
    pub entered: Receiver<ApiRequest>,
    pub release: Sender<()>,
}

impl BlockingTransport {
    pub fn new(response: ApiResponse) -> (Arc<Self>, BlockingHandles) {
        let (entered_tx, entered_rx) = crossbeam_channel::unbounded();
        let (release_tx, release_rx) = crossbeam_channel::unbounded();
        (
            Arc::new(Self {
                entered: entered_tx,
                release: release_rx,
                response,
            }),
            BlockingHandles {
                entered: entered_rx,
                release: release_tx,
            },
        )
    }
}

impl HttpTransport for BlockingTransport {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let _ = self.entered.send(request.clone());
        self.release
            .recv()
            .map_err(|_| TransportError::Unreachable("released without answer".into()))?;
        Ok(self.response.clone())
    }
}

// ─── Sample records ──────────────────────────────────────────────────────────

pub fn member() -> User {
    User {
        id: "u1".into(),
        name: "Jane Wanjiru".into(),
        email: "jane@example.com".into(),
        is_vip: false,
        is_admin: false,
    }
}

pub fn vip_member() -> User {
    User {
        id: "u2".into(),
        name: "Otieno Ouma".into(),
        email: "otieno@example.com".into(),
        is_vip: true,
        is_admin: false,
    }
}

pub fn admin() -> User {
    User {
        id: "u3".into(),
        name: "Admin".into(),
        email: "admin@paydaypicks.test".into(),
        is_vip: false,
        is_admin: true,
    }
}

/// Auth success body: `{ user, token }`.
pub fn auth_body(user: &User, token: &str) -> Value {
    json!({ "user": user, "token": token })
}

/// A `GET /tip` body with two free and two VIP tips, deliberately unsorted.
pub fn tips_body() -> Value {
    json!([
        {
            "homeTeam": "Arsenal", "awayTeam": "Chelsea", "league": "Premier League",
            "prediction": "Over 2.5 Goals", "odds": "1.85", "confidence": 78,
            "time": "2025-03-01T17:30:00.000Z", "isVip": false, "status": "pending"
        },
        {
            "homeTeam": "Man United", "awayTeam": "Liverpool", "league": "Premier League",
            "prediction": "BTTS - Yes", "odds": "2.10", "confidence": 92,
            "time": "2025-03-02T16:00:00.000Z", "isVip": true, "status": "pending"
        },
        {
            "homeTeam": "Gor Mahia", "awayTeam": "AFC Leopards", "league": "FKF Premier League",
            "prediction": "Home Win", "odds": "1.70", "confidence": 81,
            "time": "2025-03-03T15:00:00.000Z", "isVip": false, "status": "won"
        },
        {
            "homeTeam": "Real Madrid", "awayTeam": "Barcelona", "league": "La Liga",
            "prediction": "Draw", "odds": "3.40", "confidence": 64,
            "time": "2025-02-28T20:00:00.000Z", "isVip": true, "status": "lost"
        }
    ])
}

// ─── Sessions ────────────────────────────────────────────────────────────────

pub fn memory_storage() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

pub fn empty_session(storage: Arc<MemoryStore>) -> Arc<SessionStore> {
    Arc::new(SessionStore::load(storage))
}

/// A session already holding `user` and `token`, as if persisted by an earlier run.
pub fn signed_in_session(user: &User, token: &str) -> (Arc<MemoryStore>, Arc<SessionStore>) {
    let storage = memory_storage();
    storage
        .set(USER_KEY, &serde_json::to_string(user).unwrap())
        .unwrap();
    storage.set(TOKEN_KEY, token).unwrap();
    let session = Arc::new(SessionStore::load(storage.clone()));
    (storage, session)
}

pub fn api(transport: Arc<dyn HttpTransport>) -> ApiClient {
    ApiClient::new(transport)
}
