use log::*;
use prs_common::Secret;

pub const DEFAULT_RAZORPAY_API_URL: &str = "https://api.razorpay.com";

#[derive(Debug, Clone, Default)]
pub struct RazorpayConfig {
    pub key_id: String,
    pub key_secret: Secret<String>,
    pub api_base: String,
}

impl RazorpayConfig {
    pub fn new_from_env_or_default() -> Self {
        let key_id = std::env::var("PRS_RAZORPAY_KEY_ID").unwrap_or_else(|_| {
            warn!("PRS_RAZORPAY_KEY_ID not set. Razorpay calls will be rejected until it is provided");
            String::new()
        });
        let key_secret = Secret::new(std::env::var("PRS_RAZORPAY_KEY_SECRET").unwrap_or_else(|_| {
            warn!("PRS_RAZORPAY_KEY_SECRET not set. Razorpay calls will be rejected until it is provided");
            String::new()
        }));
        let api_base = std::env::var("PRS_RAZORPAY_API_URL").unwrap_or_else(|_| {
            warn!("PRS_RAZORPAY_API_URL not set, using {DEFAULT_RAZORPAY_API_URL} as default");
            DEFAULT_RAZORPAY_API_URL.to_string()
        });
        Self { key_id, key_secret, api_base }
    }

    /// Both halves of the key pair must be present before any gateway call can be signed.
    pub fn is_configured(&self) -> bool {
        !self.key_id.is_empty() && !self.key_secret.reveal().is_empty()
    }
}
