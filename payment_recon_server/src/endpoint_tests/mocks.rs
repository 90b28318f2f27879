use mockall::mock;
use payment_recon_engine::{
    db_types::{NewOrder, Order, OrderId, OrderStatus, PaymentStatus},
    traits::{GatewayError, GatewayOrder, NewGatewayOrder, OrderStore, OrderStoreError, PaymentGateway},
};

mock! {
    pub OrderDb {}
    impl OrderStore for OrderDb {
        async fn insert_order(&self, order: NewOrder) -> Result<(Order, bool), OrderStoreError>;
        async fn fetch_order(&self, order_id: &OrderId) -> Result<Option<Order>, OrderStoreError>;
        async fn fetch_pending_orders_with_notes(&self) -> Result<Vec<Order>, OrderStoreError>;
        async fn update_payment_state(
            &self,
            order_id: &OrderId,
            payment_status: PaymentStatus,
            status: OrderStatus,
        ) -> Result<Order, OrderStoreError>;
    }
}

mock! {
    pub Gateway {}
    impl PaymentGateway for Gateway {
        fn is_configured(&self) -> bool;
        async fn create_order(&self, order: NewGatewayOrder) -> Result<GatewayOrder, GatewayError>;
        async fn fetch_order(&self, gateway_order_id: &str) -> Result<GatewayOrder, GatewayError>;
    }
}
