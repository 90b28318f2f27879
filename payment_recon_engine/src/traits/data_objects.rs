use prs_common::Paise;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A request to open an order with the payment gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGatewayOrder {
    /// The amount to collect, in minor currency units
    pub amount: Paise,
    pub currency: String,
    /// A human-readable tag echoed back by the gateway. Not unique
    pub receipt: String,
    /// Opaque key-value metadata stored on the gateway order
    pub notes: Option<Value>,
}

impl NewGatewayOrder {
    pub fn new(amount: Paise, currency: String, receipt: String, notes: Option<Value>) -> Self {
        Self { amount, currency, receipt, notes }
    }
}

/// The gateway's record of an order, reduced to the fields the engine reasons about.
///
/// `status` stays a free string: the gateway's vocabulary is open-ended and anything the engine
/// does not recognise is treated as a terminal failure by the status mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayOrder {
    pub id: String,
    pub amount: Paise,
    pub currency: String,
    pub receipt: Option<String>,
    pub status: String,
}
