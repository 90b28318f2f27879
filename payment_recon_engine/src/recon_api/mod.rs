//! # Reconciliation public API
//!
//! The `recon_api` module exposes the programmatic API for the payment reconciliation engine.
//!
//! * [`reconciliation_api`] is the primary API. It drives the order lifecycle against the payment
//!   gateway: opening gateway orders, refreshing a single order's payment state, and sweeping all
//!   pending orders in one pass.
//! * [`status_map`] holds the fixed rule for deriving local payment and order state from a gateway
//!   order status. Both the single-order and bulk flows derive state through this one function.
//!
//! The other submodules are support objects and error types.
//!
//! # API usage
//!
//! An API instance is created by supplying a database backend and a gateway client that implement
//! the traits in [`crate::traits`]:
//!
//! ```rust,ignore
//! use payment_recon_engine::{ReconciliationApi, SqliteDatabase};
//! use razorpay_tools::{RazorpayApi, RazorpayConfig};
//! let db = SqliteDatabase::new_with_url("sqlite://data/payments.db", 25).await?;
//! let gateway = RazorpayApi::new(RazorpayConfig::new_from_env_or_default())?;
//! let api = ReconciliationApi::new(db, gateway);
//! let summary = api.sync_pending_orders().await?;
//! ```

pub mod errors;
pub mod recon_objects;
pub mod reconciliation_api;
pub mod status_map;
