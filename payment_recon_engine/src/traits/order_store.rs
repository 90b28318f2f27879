use thiserror::Error;

use crate::db_types::{NewOrder, Order, OrderId, OrderStatus, PaymentStatus};

#[derive(Debug, Clone, Error)]
pub enum OrderStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("The requested order {0} does not exist")]
    OrderNotFound(OrderId),
}

impl From<sqlx::Error> for OrderStoreError {
    fn from(e: sqlx::Error) -> Self {
        OrderStoreError::DatabaseError(e.to_string())
    }
}

/// The persistence contract for order records.
///
/// The payment fields (`payment_status`, `status`) are only ever written in two places: the
/// pending defaults at insertion time, and [`OrderStore::update_payment_state`] during
/// reconciliation. There is no general-purpose update method.
#[allow(async_fn_in_trait)]
pub trait OrderStore {
    /// Stores a new order with its payment fields in the pending state. This call is idempotent.
    /// Returns the order record, and `true` if the order was inserted or `false` if it already
    /// existed.
    async fn insert_order(&self, order: NewOrder) -> Result<(Order, bool), OrderStoreError>;

    /// Fetches the order with the given storefront order id, if it exists.
    async fn fetch_order(&self, order_id: &OrderId) -> Result<Option<Order>, OrderStoreError>;

    /// Fetches all orders that are candidates for reconciliation: payment still pending, and a
    /// non-null notes field to mine for a gateway order reference. Having notes is necessary but
    /// not sufficient; callers still have to extract a usable reference from them.
    async fn fetch_pending_orders_with_notes(&self) -> Result<Vec<Order>, OrderStoreError>;

    /// Writes a new payment-state pair onto the order, refreshing its `updated_at` stamp.
    /// Returns the updated order record.
    async fn update_payment_state(
        &self,
        order_id: &OrderId,
        payment_status: PaymentStatus,
        status: OrderStatus,
    ) -> Result<Order, OrderStoreError>;
}
