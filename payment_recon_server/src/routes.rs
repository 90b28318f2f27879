//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! Handlers are generic over the order store and payment gateway backends, so any long, non-cpu-bound operation
//! (gateway HTTP calls, database reads and writes) must be expressed as futures and awaited. Blocking the worker
//! thread in a handler stalls every request assigned to that worker.

use actix_web::{get, web, HttpResponse, Responder};
use log::*;
use payment_recon_engine::{
    db_types::OrderId,
    traits::{NewGatewayOrder, OrderStore, PaymentGateway},
    ReconciliationApi,
};
use prs_common::Paise;
use razorpay_tools::new_receipt_id;

use crate::{
    config::ServerOptions,
    data_objects::{NewOrderParams, OrderCreatedResponse, StatusCheckParams, StatusCheckResponse, SyncResponse},
    errors::ServerError,
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Orders  ----------------------------------------------------
route!(create_order => Post "/orders" impl OrderStore, PaymentGateway);
/// Route handler for opening a new order with the payment gateway.
///
/// The amount is given in rupees and converted to paise before being sent upstream. The gateway enforces a minimum
/// order value of ₹1, so anything below that is rejected without a gateway round trip. The key id is echoed back in
/// the response because the client-side checkout widget needs it to open a payment session.
pub async fn create_order<B, G>(
    params: web::Json<NewOrderParams>,
    api: web::Data<ReconciliationApi<B, G>>,
    options: web::Data<ServerOptions>,
) -> Result<HttpResponse, ServerError>
where
    B: OrderStore,
    G: PaymentGateway,
{
    let params = params.into_inner();
    debug!("💻️ POST create_order for {} {}", params.amount, params.currency);
    if params.amount < 1.0 {
        info!("💻️ Rejecting new order. {} is below the gateway minimum of ₹1", params.amount);
        return Err(ServerError::ValidationError(format!("Amount must be at least ₹1. Got {}", params.amount)));
    }
    let amount = Paise::from_rupees(params.amount);
    let receipt = new_receipt_id();
    let new_order = NewGatewayOrder::new(amount, params.currency, receipt.clone(), params.notes);
    let order = api.create_gateway_order(new_order).await?;
    info!("💻️ Order opened with the gateway as {} for {}", order.id, order.amount);
    let response = OrderCreatedResponse {
        success: true,
        order_id: order.id,
        amount: order.amount,
        currency: order.currency,
        key_id: options.key_id.clone(),
        receipt,
    };
    Ok(HttpResponse::Ok().json(response))
}

route!(order_status => Post "/orders/status" impl OrderStore, PaymentGateway);
/// Route handler for re-checking a single order against the payment gateway.
///
/// The gateway is the source of truth here. Whatever status it reports is mapped onto the local payment fields and
/// written back, refreshing `updated_at` even when nothing changed.
pub async fn order_status<B, G>(
    params: web::Json<StatusCheckParams>,
    api: web::Data<ReconciliationApi<B, G>>,
) -> Result<HttpResponse, ServerError>
where
    B: OrderStore,
    G: PaymentGateway,
{
    let StatusCheckParams { order_id, razorpay_order_id } = params.into_inner();
    debug!("💻️ POST order_status for {order_id} against gateway order {razorpay_order_id}");
    let order_id = OrderId::from(order_id);
    let result = api.check_order(&order_id, &razorpay_order_id).await?;
    debug!("💻️ Order {order_id} is {} at the gateway. Recorded ({}, {})", result.gateway_status, result.payment_status, result.order_status);
    Ok(HttpResponse::Ok().json(StatusCheckResponse::from(result)))
}

route!(reconcile_orders => Post "/orders/reconcile" impl OrderStore, PaymentGateway);
/// Route handler for the bulk reconciliation sweep.
///
/// A failure while processing one order is captured in that order's result entry and never aborts the batch, so the
/// response is a 200 even when some entries carry errors. Only a failure to fetch the candidate set aborts the run.
pub async fn reconcile_orders<B, G>(api: web::Data<ReconciliationApi<B, G>>) -> Result<HttpResponse, ServerError>
where
    B: OrderStore,
    G: PaymentGateway,
{
    info!("💻️ POST reconcile_orders. Starting a reconciliation sweep");
    let summary = api.sync_pending_orders().await?;
    info!("💻️ Reconciliation sweep done. {} of {} orders updated", summary.updated_count(), summary.processed());
    Ok(HttpResponse::Ok().json(SyncResponse::from(summary)))
}

route!(order_by_id => Get "/orders/{order_id}" impl OrderStore, PaymentGateway);
pub async fn order_by_id<B, G>(
    path: web::Path<OrderId>,
    api: web::Data<ReconciliationApi<B, G>>,
) -> Result<HttpResponse, ServerError>
where
    B: OrderStore,
    G: PaymentGateway,
{
    let order_id = path.into_inner();
    debug!("💻️ GET order_by_id for {order_id}");
    let order = api
        .fetch_order(&order_id)
        .await?
        .ok_or_else(|| ServerError::NoRecordFound(format!("No order with id {order_id}")))?;
    Ok(HttpResponse::Ok().json(order))
}
