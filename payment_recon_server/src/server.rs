use std::time::Duration;

use actix_cors::Cors;
use actix_web::{
    dev::Server,
    http::{header, header::HeaderName, KeepAlive},
    middleware::Logger,
    web,
    App,
    HttpServer,
};
use payment_recon_engine::{run_migrations, ReconciliationApi, SqliteDatabase};
use razorpay_tools::RazorpayApi;

use crate::{
    config::{ServerConfig, ServerOptions},
    errors::ServerError,
    routes::{health, CreateOrderRoute, OrderByIdRoute, OrderStatusRoute, ReconcileOrdersRoute},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(&config.database_url, 25)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    run_migrations(db.pool()).await.map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let gateway = RazorpayApi::new(config.razorpay.clone()).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = create_server_instance(config, db, gateway)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(
    config: ServerConfig,
    db: SqliteDatabase,
    gateway: RazorpayApi,
) -> Result<Server, ServerError> {
    let host = config.host.clone();
    let port = config.port;
    let srv = HttpServer::new(move || {
        let api = ReconciliationApi::new(db.clone(), gateway.clone());
        let options = ServerOptions::from_config(&config);
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("prs::access_log"))
            .wrap(cors_config())
            .app_data(web::Data::new(api))
            .app_data(web::Data::new(options))
            .service(health)
            .service(CreateOrderRoute::<SqliteDatabase, RazorpayApi>::new())
            .service(OrderStatusRoute::<SqliteDatabase, RazorpayApi>::new())
            .service(ReconcileOrdersRoute::<SqliteDatabase, RazorpayApi>::new())
            .service(OrderByIdRoute::<SqliteDatabase, RazorpayApi>::new())
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((host.as_str(), port))?
    .run();
    Ok(srv)
}

/// Browser checkout widgets call these endpoints directly, from any origin. The wildcard is sent
/// as a literal `*` rather than echoing the caller's origin back.
pub(crate) fn cors_config() -> Cors {
    Cors::default().allow_any_origin().send_wildcard().allowed_methods(vec!["GET", "POST"]).allowed_headers(vec![
        header::AUTHORIZATION,
        header::CONTENT_TYPE,
        HeaderName::from_static("x-client-info"),
        HeaderName::from_static("apikey"),
    ])
}
