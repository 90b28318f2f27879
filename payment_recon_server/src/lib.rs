//! # Payment reconciliation server
//! This crate hosts the HTTP server for the payment reconciliation service. It is responsible for:
//! * Opening orders with the Razorpay gateway on behalf of the checkout widget.
//! * Re-checking individual orders against the gateway and persisting the observed status.
//! * Sweeping all pending orders and reconciling them against the gateway in bulk.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `GET /health`: A health check route that returns a 200 OK response.
//! * `POST /orders`: Open a new order with the payment gateway.
//! * `POST /orders/status`: Check a single order against the gateway and persist the result.
//! * `POST /orders/reconcile`: Reconcile every pending order against the gateway.
//! * `GET /orders/{order_id}`: Fetch a single order record.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
