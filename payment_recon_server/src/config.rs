use std::env;

use log::*;
use razorpay_tools::RazorpayConfig;

const DEFAULT_PRS_HOST: &str = "127.0.0.1";
const DEFAULT_PRS_PORT: u16 = 4444;
const DEFAULT_PRS_DATABASE_URL: &str = "sqlite://data/payments.db";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Credentials and endpoint for the Razorpay REST API.
    pub razorpay: RazorpayConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_PRS_HOST.to_string(),
            port: DEFAULT_PRS_PORT,
            database_url: DEFAULT_PRS_DATABASE_URL.to_string(),
            razorpay: RazorpayConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("PRS_HOST").ok().unwrap_or_else(|| DEFAULT_PRS_HOST.into());
        let port = env::var("PRS_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for PRS_PORT. {e} Using the default, {DEFAULT_PRS_PORT}, instead."
                    );
                    DEFAULT_PRS_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_PRS_PORT);
        let database_url = env::var("PRS_DATABASE_URL").ok().unwrap_or_else(|| {
            warn!("🪛️ PRS_DATABASE_URL is not set. Using the default, {DEFAULT_PRS_DATABASE_URL}, instead.");
            DEFAULT_PRS_DATABASE_URL.into()
        });
        let razorpay = RazorpayConfig::new_from_env_or_default();
        Self { host, port, database_url, razorpay }
    }
}

//-------------------------------------------------  ServerOptions  ----------------------------------------------------
/// The subset of the server configuration that request handlers need. Generally we try to keep this as small as
/// possible, and exclude secrets to avoid passing sensitive information around the system.
#[derive(Clone, Debug)]
pub struct ServerOptions {
    /// The public half of the gateway credentials. Clients need it to open a checkout session.
    pub key_id: String,
}

impl ServerOptions {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self { key_id: config.razorpay.key_id.clone() }
    }
}
