mod api;
mod config;
mod error;
mod helpers;

mod data_objects;

pub use api::RazorpayApi;
pub use config::RazorpayConfig;
pub use data_objects::{NewRazorpayOrderBody, RazorpayOrder};
pub use error::RazorpayApiError;
pub use helpers::new_receipt_id;
