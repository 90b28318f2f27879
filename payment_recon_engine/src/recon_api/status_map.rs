use crate::db_types::{OrderStatus, PaymentStatus};

/// The fixed rule for deriving local order state from a gateway order status.
///
/// `paid` is the gateway's only success state. `created` and `attempted` both mean the checkout is
/// still in flight. Everything else the gateway can report (`expired`, refund states, or novel
/// statuses added later) is treated as a terminal failure.
pub fn map_gateway_status(gateway_status: &str) -> (PaymentStatus, OrderStatus) {
    match gateway_status {
        "paid" => (PaymentStatus::Completed, OrderStatus::Confirmed),
        "created" | "attempted" => (PaymentStatus::Pending, OrderStatus::Pending),
        _ => (PaymentStatus::Failed, OrderStatus::Cancelled),
    }
}
