//! Shared scaffolding for the engine integration tests.
#![allow(dead_code)]

use std::collections::HashMap;

use payment_recon_engine::{
    db_types::{NewOrder, Order},
    run_migrations,
    traits::{GatewayError, GatewayOrder, NewGatewayOrder, OrderStore, PaymentGateway},
    SqliteDatabase,
};
use prs_common::Paise;

/// Creates a fresh in-memory database with the schema applied. The single-connection pool keeps
/// the in-memory store alive for the duration of the test.
pub async fn prepare_test_db() -> SqliteDatabase {
    let _ = env_logger::try_init();
    let db = SqliteDatabase::new_with_url("sqlite::memory:", 1).await.expect("Error creating test database");
    run_migrations(db.pool()).await.expect("Error running DB migrations");
    db
}

pub async fn seed_order(db: &SqliteDatabase, order_id: &str, amount: f64, notes: Option<&str>) -> Order {
    let mut order = NewOrder::new(order_id, amount);
    if let Some(notes) = notes {
        order = order.with_notes(notes);
    }
    let (order, inserted) = db.insert_order(order).await.expect("Error inserting order");
    assert!(inserted, "order {order_id} was seeded twice");
    order
}

/// A canned gateway: statuses are looked up from a table, and selected ids can be made to fail
/// with a given HTTP status.
#[derive(Debug, Clone, Default)]
pub struct TestGateway {
    statuses: HashMap<String, String>,
    failures: HashMap<String, u16>,
    unconfigured: bool,
}

impl TestGateway {
    pub fn with_status(mut self, gateway_order_id: &str, status: &str) -> Self {
        self.statuses.insert(gateway_order_id.to_string(), status.to_string());
        self
    }

    pub fn with_failure(mut self, gateway_order_id: &str, http_status: u16) -> Self {
        self.failures.insert(gateway_order_id.to_string(), http_status);
        self
    }

    /// Makes every call fail as if the credentials were missing from the environment.
    pub fn unconfigured(mut self) -> Self {
        self.unconfigured = true;
        self
    }
}

impl PaymentGateway for TestGateway {
    fn is_configured(&self) -> bool {
        !self.unconfigured
    }

    async fn create_order(&self, order: NewGatewayOrder) -> Result<GatewayOrder, GatewayError> {
        if self.unconfigured {
            return Err(GatewayError::NotConfigured);
        }
        Ok(GatewayOrder {
            id: "order_test0001".to_string(),
            amount: order.amount,
            currency: order.currency,
            receipt: Some(order.receipt),
            status: "created".to_string(),
        })
    }

    async fn fetch_order(&self, gateway_order_id: &str) -> Result<GatewayOrder, GatewayError> {
        if self.unconfigured {
            return Err(GatewayError::NotConfigured);
        }
        if let Some(&status) = self.failures.get(gateway_order_id) {
            return Err(GatewayError::QueryFailed { status, body: "Internal server error".to_string() });
        }
        let status = self.statuses.get(gateway_order_id).cloned().ok_or_else(|| GatewayError::QueryFailed {
            status: 400,
            body: format!("{gateway_order_id} is not a valid order id"),
        })?;
        Ok(GatewayOrder {
            id: gateway_order_id.to_string(),
            amount: Paise::from(49950),
            currency: "INR".to_string(),
            receipt: None,
            status,
        })
    }
}
