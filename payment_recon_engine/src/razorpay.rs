//! Razorpay provider for the [`PaymentGateway`] trait.
//!
//! The impl lives here rather than in `razorpay_tools` so that the client crate stays a plain REST
//! wrapper with no knowledge of the engine.
use razorpay_tools::{NewRazorpayOrderBody, RazorpayApi, RazorpayApiError, RazorpayOrder};

use crate::traits::{GatewayError, GatewayOrder, NewGatewayOrder, PaymentGateway};

impl From<RazorpayApiError> for GatewayError {
    fn from(e: RazorpayApiError) -> Self {
        match e {
            RazorpayApiError::QueryError { status, message } => GatewayError::QueryFailed { status, body: message },
            RazorpayApiError::JsonError(msg) => GatewayError::ResponseFormat(msg),
            RazorpayApiError::RestResponseError(msg) => GatewayError::Unreachable(msg),
            RazorpayApiError::Initialization(msg) => GatewayError::Unreachable(msg),
        }
    }
}

impl From<RazorpayOrder> for GatewayOrder {
    fn from(order: RazorpayOrder) -> Self {
        Self {
            id: order.id,
            amount: order.amount,
            currency: order.currency,
            receipt: order.receipt,
            status: order.status,
        }
    }
}

impl PaymentGateway for RazorpayApi {
    fn is_configured(&self) -> bool {
        self.config().is_configured()
    }

    async fn create_order(&self, order: NewGatewayOrder) -> Result<GatewayOrder, GatewayError> {
        if !self.config().is_configured() {
            return Err(GatewayError::NotConfigured);
        }
        let body = NewRazorpayOrderBody::new(order.amount, order.currency, order.receipt, order.notes);
        let created = RazorpayApi::create_order(self, body).await?;
        Ok(created.into())
    }

    async fn fetch_order(&self, gateway_order_id: &str) -> Result<GatewayOrder, GatewayError> {
        if !self.config().is_configured() {
            return Err(GatewayError::NotConfigured);
        }
        let fetched = RazorpayApi::fetch_order(self, gateway_order_id).await?;
        Ok(fetched.into())
    }
}
