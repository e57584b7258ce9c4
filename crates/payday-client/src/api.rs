//! Typed calls for every Payday API endpoint.

use std::sync::Arc;

use payday_core::constants::{LOGIN_PATH, PROFILE_PATH, SIGNUP_PATH, STK_PUSH_PATH, TIPS_PATH};
use payday_core::{PaymentRequest, Tip, User};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::auth::{LoginForm, SignupForm};
use crate::errors::ApiError;
use crate::transport::{ApiRequest, ApiResponse, HttpTransport};

/// Successful body of the login and signup endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    #[serde(default)]
    pub token: Option<String>,
}

/// Whatever the STK-push endpoint tells us on success. Every field is optional;
/// an empty body is a valid receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StkPushReceipt {
    pub message: Option<String>,
    #[serde(alias = "CheckoutRequestID", alias = "checkoutRequestId")]
    pub checkout_request_id: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// `POST /auth/login`
    pub fn login(&self, form: &LoginForm) -> Result<AuthPayload, ApiError> {
        let response = self.send(ApiRequest::post(LOGIN_PATH, form)?)?;
        decode(&response)
    }

    /// `POST /auth/signup`
    pub fn signup(&self, form: &SignupForm) -> Result<AuthPayload, ApiError> {
        let response = self.send(ApiRequest::post(SIGNUP_PATH, form)?)?;
        decode(&response)
    }

    /// `GET /tip`, authenticated when a token is available.
    pub fn tips(&self, token: Option<&str>) -> Result<Vec<Tip>, ApiError> {
        let response = self.send(ApiRequest::get(TIPS_PATH).with_bearer(token))?;
        decode(&response)
    }

    /// `GET /profile`
    pub fn profiles(&self, token: Option<&str>) -> Result<Vec<User>, ApiError> {
        let response = self.send(ApiRequest::get(PROFILE_PATH).with_bearer(token))?;
        decode(&response)
    }

    /// `POST /mpesa/stk-push`
    pub fn stk_push(
        &self,
        request: &PaymentRequest,
        token: Option<&str>,
    ) -> Result<StkPushReceipt, ApiError> {
        let response = self.send(ApiRequest::post(STK_PUSH_PATH, request)?.with_bearer(token))?;
        if response.body.trim().is_empty() {
            return Ok(StkPushReceipt::default());
        }
        match serde_json::from_str(&response.body) {
            Ok(receipt) => Ok(receipt),
            Err(e) => {
                // The push already went out; an odd success body is not a failure.
                warn!(error = %e, "Unrecognised STK push response body");
                Ok(StkPushReceipt::default())
            }
        }
    }

    /// Execute and turn any non-2xx status into `ApiError::Rejected`.
    fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let response = self.transport.execute(&request)?;
        if response.is_success() {
            return Ok(response);
        }
        let message = response
            .server_message()
            .unwrap_or_else(|| format!("Request failed with status {}", response.status));
        warn!(
            method = request.method.as_str(),
            path = %request.path,
            status = response.status,
            message = %message,
            "Request rejected"
        );
        Err(ApiError::Rejected {
            status: response.status,
            message,
        })
    }
}

fn decode<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}
