use prs_common::Paise;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /v1/orders`. Amounts are always in paise; `payment_capture` is fixed to 1
/// so that successful payments are captured without a second API call.
#[derive(Debug, Clone, Serialize)]
pub struct NewRazorpayOrderBody {
    pub amount: Paise,
    pub currency: String,
    pub receipt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Value>,
    pub payment_capture: u8,
}

impl NewRazorpayOrderBody {
    pub fn new(amount: Paise, currency: String, receipt: String, notes: Option<Value>) -> Self {
        Self { amount, currency, receipt, notes, payment_capture: 1 }
    }
}

/// An order record as Razorpay returns it. Only the fields this system reads are kept; the gateway
/// sends more (`amount_paid`, `attempts`, ...) and serde ignores them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RazorpayOrder {
    pub id: String,
    pub amount: Paise,
    pub currency: String,
    pub receipt: Option<String>,
    pub status: String,
    pub notes: Option<Value>,
}
