use actix_web::{http::StatusCode, web, web::ServiceConfig};
use payment_recon_engine::{
    db_types::{Order, OrderStatus, PaymentStatus},
    traits::{GatewayError, OrderStoreError},
    ReconciliationApi,
};
use serde_json::json;

use super::helpers::{gateway_order, order, post_request};
use crate::{
    endpoint_tests::mocks::{MockGateway, MockOrderDb},
    routes::ReconcileOrdersRoute,
};

#[actix_web::test]
async fn reconcile_with_no_pending_orders() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        post_request("/orders/reconcile", json!({}), configure_no_candidates).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"success":true,"message":"Processed 0 orders","results":[],"updatedCount":0}"#);
}

// One order fails at the gateway, the other completes. The failure must stay contained to its own
// result entry.
#[actix_web::test]
async fn reconcile_isolates_gateway_failures() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        post_request("/orders/reconcile", json!({}), configure_partial_failure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, PARTIAL_FAILURE_JSON);
}

#[actix_web::test]
async fn reconcile_skips_orders_without_a_gateway_reference() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        post_request("/orders/reconcile", json!({}), configure_skip_and_unchanged).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"success":true,"message":"Processed 1 orders","results":[{"orderId":"ord-2","razorpayOrderId":"order_ccc","status":"pending","updated":false}],"updatedCount":0}"#
    );
}

#[actix_web::test]
async fn reconcile_aborts_when_the_candidate_fetch_fails() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        post_request("/orders/reconcile", json!({}), configure_fetch_failure).await.expect("Request failed");
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        r#"{"error":"An error occurred on the backend of the server. Database error: unable to open database file","success":false}"#
    );
}

#[actix_web::test]
async fn reconcile_needs_gateway_credentials() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        post_request("/orders/reconcile", json!({}), configure_unconfigured).await.expect("Request failed");
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        r#"{"error":"Invalid server configuration. Payment gateway credentials are not configured","success":false}"#
    );
}

fn candidate(id: i64, order_id: &str, notes: &str) -> Order {
    Order { notes: Some(notes.to_string()), ..order(id, order_id, PaymentStatus::Pending, OrderStatus::Pending) }
}

fn configure_no_candidates(cfg: &mut ServiceConfig) {
    let mut db = MockOrderDb::new();
    db.expect_fetch_pending_orders_with_notes().returning(|| Ok(Vec::new()));
    let mut gateway = MockGateway::new();
    gateway.expect_is_configured().returning(|| true);
    let api = ReconciliationApi::new(db, gateway);
    cfg.service(ReconcileOrdersRoute::<MockOrderDb, MockGateway>::new()).app_data(web::Data::new(api));
}

fn configure_partial_failure(cfg: &mut ServiceConfig) {
    let mut db = MockOrderDb::new();
    db.expect_fetch_pending_orders_with_notes().returning(|| {
        Ok(vec![
            candidate(1, "ord-a", "paid via razorpay, ref order_aaa"),
            candidate(2, "ord-b", r#"{"razorpay_order_id":"order_bbb"}"#),
        ])
    });
    db.expect_update_payment_state()
        .withf(|id, p, s| id.as_str() == "ord-b" && *p == PaymentStatus::Completed && *s == OrderStatus::Confirmed)
        .returning(|id, p, s| Ok(order(2, id.as_str(), p, s)));
    let mut gateway = MockGateway::new();
    gateway.expect_is_configured().returning(|| true);
    gateway.expect_fetch_order().returning(|id| match id {
        "order_aaa" => Err(GatewayError::QueryFailed { status: 500, body: "Internal server error".to_string() }),
        id => Ok(gateway_order(id, "paid")),
    });
    let api = ReconciliationApi::new(db, gateway);
    cfg.service(ReconcileOrdersRoute::<MockOrderDb, MockGateway>::new()).app_data(web::Data::new(api));
}

// ord-1 has notes but no usable reference in them, so it must not reach the gateway. ord-2 is
// still "created" upstream, so it is reported without being rewritten.
fn configure_skip_and_unchanged(cfg: &mut ServiceConfig) {
    let mut db = MockOrderDb::new();
    db.expect_fetch_pending_orders_with_notes().returning(|| {
        Ok(vec![
            candidate(1, "ord-1", "shipped with priority courier"),
            candidate(2, "ord-2", "gateway ref order_ccc"),
        ])
    });
    let mut gateway = MockGateway::new();
    gateway.expect_is_configured().returning(|| true);
    gateway.expect_fetch_order().withf(|id| id == "order_ccc").returning(|id| Ok(gateway_order(id, "created")));
    let api = ReconciliationApi::new(db, gateway);
    cfg.service(ReconcileOrdersRoute::<MockOrderDb, MockGateway>::new()).app_data(web::Data::new(api));
}

fn configure_fetch_failure(cfg: &mut ServiceConfig) {
    let mut db = MockOrderDb::new();
    db.expect_fetch_pending_orders_with_notes()
        .returning(|| Err(OrderStoreError::DatabaseError("unable to open database file".to_string())));
    let mut gateway = MockGateway::new();
    gateway.expect_is_configured().returning(|| true);
    let api = ReconciliationApi::new(db, gateway);
    cfg.service(ReconcileOrdersRoute::<MockOrderDb, MockGateway>::new()).app_data(web::Data::new(api));
}

// The store mock has no stubbed methods and panics on any call, so this also pins the abort to
// before the candidate fetch.
fn configure_unconfigured(cfg: &mut ServiceConfig) {
    let mut gateway = MockGateway::new();
    gateway.expect_is_configured().returning(|| false);
    let api = ReconciliationApi::new(MockOrderDb::new(), gateway);
    cfg.service(ReconcileOrdersRoute::<MockOrderDb, MockGateway>::new()).app_data(web::Data::new(api));
}

const PARTIAL_FAILURE_JSON: &str = r#"{"success":true,"message":"Processed 2 orders","results":[{"orderId":"ord-a","error":"Payment gateway error: Gateway query failed. Error 500. Internal server error","updated":false},{"orderId":"ord-b","razorpayOrderId":"order_bbb","oldStatus":"pending","newStatus":"completed","updated":true}],"updatedCount":1}"#;
