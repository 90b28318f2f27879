use thiserror::Error;

use crate::traits::data_objects::{GatewayOrder, NewGatewayOrder};

#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    #[error("Payment gateway credentials are not configured")]
    NotConfigured,
    #[error("Gateway query failed. Error {status}. {body}")]
    QueryFailed { status: u16, body: String },
    #[error("Could not reach the payment gateway: {0}")]
    Unreachable(String),
    #[error("Unexpected gateway response: {0}")]
    ResponseFormat(String),
}

/// The contract for the external payment processor.
///
/// The gateway owns the authoritative order lifecycle; this system only ever reads it back and
/// never writes gateway state beyond opening new orders.
#[allow(async_fn_in_trait)]
pub trait PaymentGateway {
    /// Reports whether the gateway has credentials to call out with.
    fn is_configured(&self) -> bool;

    /// Opens a new order on the gateway and returns the gateway's record of it.
    async fn create_order(&self, order: NewGatewayOrder) -> Result<GatewayOrder, GatewayError>;

    /// Reads back the gateway's current view of the given gateway order.
    async fn fetch_order(&self, gateway_order_id: &str) -> Result<GatewayOrder, GatewayError>;
}
