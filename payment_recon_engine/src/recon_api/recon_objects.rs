use serde::{Deserialize, Serialize};

use crate::db_types::{Order, OrderId, OrderStatus, PaymentStatus};

/// The result of reconciling a single order on demand: the rewritten order record alongside the
/// gateway observation that justified it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciledOrder {
    pub order: Order,
    pub gateway_status: String,
    pub payment_status: PaymentStatus,
    pub order_status: OrderStatus,
}

/// Per-order outcome of a bulk reconciliation sweep, in the wire shape the sweep report uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SyncRecord {
    #[serde(rename_all = "camelCase")]
    Updated {
        order_id: OrderId,
        razorpay_order_id: String,
        old_status: PaymentStatus,
        new_status: PaymentStatus,
        updated: bool,
    },
    #[serde(rename_all = "camelCase")]
    Unchanged { order_id: OrderId, razorpay_order_id: String, status: PaymentStatus, updated: bool },
    #[serde(rename_all = "camelCase")]
    Failed { order_id: OrderId, error: String, updated: bool },
}

impl SyncRecord {
    pub fn updated(
        order_id: OrderId,
        razorpay_order_id: String,
        old_status: PaymentStatus,
        new_status: PaymentStatus,
    ) -> Self {
        Self::Updated { order_id, razorpay_order_id, old_status, new_status, updated: true }
    }

    pub fn unchanged(order_id: OrderId, razorpay_order_id: String, status: PaymentStatus) -> Self {
        Self::Unchanged { order_id, razorpay_order_id, status, updated: false }
    }

    pub fn failed(order_id: OrderId, error: String) -> Self {
        Self::Failed { order_id, error, updated: false }
    }

    pub fn is_updated(&self) -> bool {
        matches!(self, SyncRecord::Updated { .. })
    }

    pub fn order_id(&self) -> &OrderId {
        match self {
            SyncRecord::Updated { order_id, .. } => order_id,
            SyncRecord::Unchanged { order_id, .. } => order_id,
            SyncRecord::Failed { order_id, .. } => order_id,
        }
    }
}

/// The accumulated outcome of one bulk reconciliation sweep. Orders whose notes carried no usable
/// gateway reference are skipped before they reach the summary, so `processed` counts only orders
/// that were actually reconciled against the gateway (or failed trying).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncSummary {
    pub results: Vec<SyncRecord>,
}

impl SyncSummary {
    pub fn push(&mut self, record: SyncRecord) {
        self.results.push(record);
    }

    pub fn processed(&self) -> usize {
        self.results.len()
    }

    pub fn updated_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_updated()).count()
    }
}
