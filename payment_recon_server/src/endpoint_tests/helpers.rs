use actix_web::{body::MessageBody, http::StatusCode, test, test::TestRequest, web::ServiceConfig, App};
use chrono::{TimeZone, Utc};
use log::debug;
use payment_recon_engine::{
    db_types::{Order, OrderId, OrderStatus, PaymentStatus},
    traits::GatewayOrder,
};
use prs_common::Paise;
use serde::Serialize;

use crate::config::ServerOptions;

pub const TEST_KEY_ID: &str = "rzp_test_1DP5mmOlF5G5ag";

pub fn test_options() -> ServerOptions {
    ServerOptions { key_id: TEST_KEY_ID.to_string() }
}

// Fixed timestamps keep the expected JSON bodies deterministic
pub fn order(id: i64, order_id: &str, payment_status: PaymentStatus, status: OrderStatus) -> Order {
    Order {
        id,
        order_id: OrderId(order_id.into()),
        total_amount: 499.5,
        payment_status,
        status,
        notes: None,
        created_at: Utc.with_ymd_and_hms(2024, 5, 20, 10, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 5, 20, 10, 30, 0).unwrap(),
    }
}

pub fn gateway_order(id: &str, status: &str) -> GatewayOrder {
    GatewayOrder {
        id: id.to_string(),
        amount: Paise::from(49950),
        currency: "INR".to_string(),
        receipt: None,
        status: status.to_string(),
    }
}

pub async fn get_request(path: &str, configure: fn(&mut ServiceConfig)) -> Result<(StatusCode, String), String> {
    let req = TestRequest::get().uri(path).to_request();
    let app = App::new().configure(configure);
    let service = test::init_service(app).await;
    debug!("Making GET request to {path}");
    let (_, res) = test::try_call_service(&service, req).await.map_err(|e| e.to_string())?.into_parts();
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    Ok((status, body))
}

pub async fn post_request<B: Serialize>(
    path: &str,
    body: B,
    configure: fn(&mut ServiceConfig),
) -> Result<(StatusCode, String), String> {
    let req = TestRequest::post().uri(path).set_json(body).to_request();
    let app = App::new().configure(configure);
    let service = test::init_service(app).await;
    debug!("Making POST request to {path}");
    let (_, res) = test::try_call_service(&service, req).await.map_err(|e| e.to_string())?.into_parts();
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    Ok((status, body))
}
