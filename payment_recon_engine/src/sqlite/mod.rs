//! SQLite database module for the payment reconciliation engine.

//!
mod sqlite_impl;

pub mod db;
pub use db::run_migrations;
pub use sqlite_impl::SqliteDatabase;
