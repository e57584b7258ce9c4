//! PaymentInitiator: turn a plan purchase into one STK-push request.

use std::sync::Arc;

use payday_core::config::PaymentConfig;
use payday_core::{Notice, PaymentRequest, Plan};
use payday_session::SessionStore;
use tracing::{debug, info, warn};

use super::phone::normalize_phone;
use super::prompt::PhonePrompt;
use crate::api::{ApiClient, StkPushReceipt};
use crate::busy::BusyFlag;
use crate::errors::PaymentError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentOutcome {
    pub request: PaymentRequest,
    pub receipt: StkPushReceipt,
    pub notice: Notice,
}

/// Sends the STK push for a plan purchase.
///
/// The push only asks the phone for a PIN. Whether the payment completes,
/// and when the subscription activates, is between the backend and the
/// user's mobile-money app; nothing here polls for it.
pub struct PaymentInitiator {
    api: ApiClient,
    session: Arc<SessionStore>,
    country_code: String,
    busy: BusyFlag,
}

impl PaymentInitiator {
    pub fn new(api: ApiClient, session: Arc<SessionStore>, config: &PaymentConfig) -> Self {
        Self {
            api,
            session,
            country_code: config.country_code.clone(),
            busy: BusyFlag::new(),
        }
    }

    /// Prompt for a phone number and request the push.
    ///
    /// Aborts without a request when: another purchase is in flight, the
    /// prompt is dismissed or blank, the session has no user id, or the
    /// plan price holds no amount.
    pub fn initiate(
        &self,
        plan: &Plan,
        prompt: &mut dyn PhonePrompt,
    ) -> Result<PaymentOutcome, PaymentError> {
        let _guard = self.busy.try_acquire().ok_or(PaymentError::Busy)?;

        let raw = match prompt.ask_phone(plan) {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => {
                debug!(plan = plan.name, "Phone prompt dismissed");
                return Err(PaymentError::Cancelled);
            }
        };
        let phone = normalize_phone(&raw, &self.country_code);

        let user_id = self.session.user_id().ok_or_else(|| {
            warn!(plan = plan.name, "Payment attempted without a user id in session");
            PaymentError::SessionExpired
        })?;

        let amount = plan.amount().ok_or_else(|| PaymentError::InvalidPrice {
            plan: plan.name.to_string(),
            price: plan.price.to_string(),
        })?;

        let request = PaymentRequest {
            phone,
            plan: plan.name.to_string(),
            amount,
            user_id,
        };
        let token = self.session.token();
        let receipt = self.api.stk_push(&request, token.as_deref())?;

        info!(
            plan = plan.name,
            amount = amount,
            user_id = %request.user_id,
            "STK push requested"
        );
        let notice = Notice::success(format!(
            "STK push sent to {}. Enter your M-Pesa PIN to complete payment.",
            request.phone
        ));
        Ok(PaymentOutcome {
            request,
            receipt,
            notice,
        })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }
}
