use std::fmt::Debug;

use log::*;

use crate::{
    db_types::{Order, OrderId},
    helpers::extract_gateway_order_id,
    recon_api::{
        errors::ReconciliationError,
        recon_objects::{ReconciledOrder, SyncRecord, SyncSummary},
        status_map::map_gateway_status,
    },
    traits::{GatewayError, GatewayOrder, NewGatewayOrder, OrderStore, PaymentGateway},
};

/// `ReconciliationApi` is the primary API for keeping persisted orders in agreement with the
/// payment gateway. It owns no state beyond its two providers and is cheap to construct per
/// request.
pub struct ReconciliationApi<B, G> {
    db: B,
    gateway: G,
}

impl<B, G> Debug for ReconciliationApi<B, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReconciliationApi")
    }
}

impl<B, G> ReconciliationApi<B, G> {
    pub fn new(db: B, gateway: G) -> Self {
        Self { db, gateway }
    }
}

impl<B, G> ReconciliationApi<B, G>
where
    B: OrderStore,
    G: PaymentGateway,
{
    /// Opens a new order with the payment gateway and returns the gateway's record of it.
    ///
    /// Nothing is persisted locally: the storefront owns order creation, and the gateway order id
    /// only enters this system later, embedded in an order's notes.
    pub async fn create_gateway_order(&self, order: NewGatewayOrder) -> Result<GatewayOrder, ReconciliationError> {
        let gateway_order = self.gateway.create_order(order).await?;
        info!("🔄️ Gateway order {} opened for {}", gateway_order.id, gateway_order.amount);
        Ok(gateway_order)
    }

    /// Fetches the persisted order with the given storefront order id.
    pub async fn fetch_order(&self, order_id: &OrderId) -> Result<Option<Order>, ReconciliationError> {
        let order = self.db.fetch_order(order_id).await?;
        Ok(order)
    }

    /// Refreshes the payment state of a single order from the gateway's view of it.
    ///
    /// The order record is written unconditionally, even when the derived state pair is unchanged,
    /// so that `updated_at` always reflects the most recent reconciliation. Repeating the call
    /// against an unchanged gateway order rewrites the same values; a newer gateway state simply
    /// overwrites the older mapping.
    pub async fn check_order(
        &self,
        order_id: &OrderId,
        gateway_order_id: &str,
    ) -> Result<ReconciledOrder, ReconciliationError> {
        let gateway_order = self.gateway.fetch_order(gateway_order_id).await?;
        let (payment_status, order_status) = map_gateway_status(&gateway_order.status);
        debug!(
            "🔄️ Gateway order {gateway_order_id} is '{}', so order {order_id} becomes ({payment_status}, \
             {order_status})",
            gateway_order.status
        );
        let order = self.db.update_payment_state(order_id, payment_status, order_status).await?;
        info!("🔄️ Order {order_id} reconciled against gateway order {gateway_order_id}");
        Ok(ReconciledOrder { order, gateway_status: gateway_order.status, payment_status, order_status })
    }

    /// Sweeps every pending order that carries a notes field and reconciles each one against the
    /// gateway.
    ///
    /// Orders whose notes yield no gateway reference are skipped without a result entry. Every
    /// other per-order failure is captured in that order's result entry and the sweep carries on;
    /// only missing gateway credentials (checked before the candidate scan, since they would fail
    /// every order identically) and the candidate fetch itself can fail the call as a whole.
    /// Unchanged orders are reported but not rewritten.
    pub async fn sync_pending_orders(&self) -> Result<SyncSummary, ReconciliationError> {
        if !self.gateway.is_configured() {
            error!("🔄️ Aborting the sweep. The gateway credentials are not configured");
            return Err(GatewayError::NotConfigured.into());
        }
        let candidates = self.db.fetch_pending_orders_with_notes().await?;
        info!("🔄️ Reconciling {} pending orders against the gateway", candidates.len());
        let mut summary = SyncSummary::default();
        for order in candidates {
            let Some(gateway_order_id) = order.notes.as_deref().and_then(extract_gateway_order_id) else {
                debug!("🔄️ Order {} has no recoverable gateway order id in its notes. Skipping", order.order_id);
                continue;
            };
            let record = match self.sync_one_order(&order, &gateway_order_id).await {
                Ok(record) => record,
                Err(e) => {
                    warn!("🔄️ Could not reconcile order {}: {e}", order.order_id);
                    SyncRecord::failed(order.order_id.clone(), e.to_string())
                },
            };
            summary.push(record);
        }
        info!(
            "🔄️ Reconciliation sweep complete. {} of {} processed orders updated",
            summary.updated_count(),
            summary.processed()
        );
        Ok(summary)
    }

    async fn sync_one_order(&self, order: &Order, gateway_order_id: &str) -> Result<SyncRecord, ReconciliationError> {
        let gateway_order = self.gateway.fetch_order(gateway_order_id).await?;
        let (payment_status, order_status) = map_gateway_status(&gateway_order.status);
        if payment_status == order.payment_status {
            trace!("🔄️ Order {} is already '{payment_status}'. Nothing to write", order.order_id);
            return Ok(SyncRecord::unchanged(order.order_id.clone(), gateway_order_id.to_string(), payment_status));
        }
        self.db.update_payment_state(&order.order_id, payment_status, order_status).await?;
        debug!("🔄️ Order {} moved from '{}' to '{payment_status}'", order.order_id, order.payment_status);
        Ok(SyncRecord::updated(
            order.order_id.clone(),
            gateway_order_id.to_string(),
            order.payment_status,
            payment_status,
        ))
    }
}
