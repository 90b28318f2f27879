//! # Backend interface contracts.
//!
//! This module provides the interfaces that the reconciliation engine's *providers* need to
//! implement.
//!
//! ## Traits
//! * [`OrderStore`] defines the behaviour a persistence backend must expose: inserting orders,
//!   fetching them, listing reconciliation candidates, and writing payment-state transitions.
//! * [`PaymentGateway`] defines the behaviour of the external payment processor: opening an order
//!   on the gateway and reading back its current state.
//!
//! Each trait carries its own error enum so that a provider never leaks backend-specific error
//! types into the engine.
mod order_store;
mod payment_gateway;

mod data_objects;

pub use data_objects::{GatewayOrder, NewGatewayOrder};
pub use order_store::{OrderStore, OrderStoreError};
pub use payment_gateway::{GatewayError, PaymentGateway};
