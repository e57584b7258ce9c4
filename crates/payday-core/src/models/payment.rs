use serde::{Deserialize, Serialize};

/// Body of `POST /mpesa/stk-push`. Built fresh for every purchase attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub phone: String,
    pub plan: String,
    pub amount: u64,
    pub user_id: String,
}
