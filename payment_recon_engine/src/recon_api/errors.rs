use thiserror::Error;

use crate::traits::{GatewayError, OrderStoreError};

#[derive(Debug, Clone, Error)]
pub enum ReconciliationError {
    #[error("Order store error: {0}")]
    StoreError(#[from] OrderStoreError),
    #[error("Payment gateway error: {0}")]
    GatewayError(#[from] GatewayError),
}
