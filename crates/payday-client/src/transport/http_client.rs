//! reqwest-backed transport.

use std::time::{Duration, Instant};

use payday_core::config::ApiConfig;
use payday_core::constants::CLIENT_NAME;
use reqwest::blocking::Client;
use tracing::{debug, warn};

use super::protocol::{ApiRequest, ApiResponse, Method};
use super::HttpTransport;
use crate::errors::TransportError;

/// Blocking HTTP client bound to one API base URL.
///
/// No timeout unless `api.request_timeout_secs` is set: an unanswered
/// request holds its action's busy flag until the server responds.
pub struct HttpClient {
    client: Client,
    config: ApiConfig,
}

impl HttpClient {
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| format!("{CLIENT_NAME}/{}", env!("CARGO_PKG_VERSION")));
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(config.request_timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

impl HttpTransport for HttpClient {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.config.endpoint(&request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let start = Instant::now();
        let response = builder.send().map_err(|e| {
            warn!(
                method = request.method.as_str(),
                path = %request.path,
                error = %e,
                duration_ms = start.elapsed().as_millis() as u64,
                "Request failed"
            );
            TransportError::from(e)
        })?;
        let status = response.status().as_u16();
        let body = response.text().map_err(TransportError::from)?;

        debug!(
            method = request.method.as_str(),
            path = %request.path,
            status = status,
            duration_ms = start.elapsed().as_millis() as u64,
            "Request completed"
        );
        Ok(ApiResponse { status, body })
    }
}
