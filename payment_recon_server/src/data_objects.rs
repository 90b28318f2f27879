use payment_recon_engine::{
    db_types::{Order, OrderStatus, PaymentStatus},
    ReconciledOrder,
    SyncRecord,
    SyncSummary,
};
use prs_common::{Paise, INR_CURRENCY_CODE};
use serde::{Deserialize, Serialize};

fn default_currency() -> String {
    INR_CURRENCY_CODE.to_string()
}

/// Payload for opening a new order with the payment gateway. The amount is given in rupees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrderParams {
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub notes: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreatedResponse {
    pub success: bool,
    pub order_id: String,
    pub amount: Paise,
    pub currency: String,
    pub key_id: String,
    pub receipt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheckParams {
    pub order_id: String,
    pub razorpay_order_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheckResponse {
    pub success: bool,
    pub order: Order,
    pub gateway_status: String,
    pub payment_status: PaymentStatus,
    pub order_status: OrderStatus,
}

impl From<ReconciledOrder> for StatusCheckResponse {
    fn from(value: ReconciledOrder) -> Self {
        Self {
            success: true,
            order: value.order,
            gateway_status: value.gateway_status,
            payment_status: value.payment_status,
            order_status: value.order_status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncResponse {
    pub success: bool,
    pub message: String,
    pub results: Vec<SyncRecord>,
    #[serde(rename = "updatedCount")]
    pub updated_count: usize,
}

impl From<SyncSummary> for SyncResponse {
    fn from(summary: SyncSummary) -> Self {
        let message = format!("Processed {} orders", summary.processed());
        let updated_count = summary.updated_count();
        Self { success: true, message, results: summary.results, updated_count }
    }
}
