//! Payment Reconciliation Engine
//!
//! This library contains the core logic for keeping locally persisted orders in agreement with the
//! payment gateway's view of them. It is server-agnostic: the HTTP boundary lives elsewhere and
//! drives everything through the [`ReconciliationApi`].
//!
//! The library is divided into two main sections:
//! 1. Database management and control ([`mod@traits`] and the sqlite backend). You should never
//!    need to access the database directly. Instead, use the public API provided by the engine.
//!    The exception is the data types used in the database. These are defined in the `db_types`
//!    module and are public.
//! 2. The reconciliation public API ([`ReconciliationApi`]). This is responsible for opening
//!    gateway orders, refreshing the payment state of a single order, and sweeping all pending
//!    orders in one pass. Specific backends (e.g. SQLite) and gateways (e.g. Razorpay) need to
//!    implement the traits in [`mod@traits`] in order to act as providers for the API.
pub mod db_types;
pub mod helpers;
mod razorpay;
mod recon_api;
pub mod traits;

#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "sqlite")]
pub use sqlite::{run_migrations, SqliteDatabase};
pub use recon_api::{
    errors::ReconciliationError,
    recon_objects::{ReconciledOrder, SyncRecord, SyncSummary},
    reconciliation_api::ReconciliationApi,
    status_map::map_gateway_status,
};
