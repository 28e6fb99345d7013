//! Veloce Server - Showroom HTTP API.
//!
//! Serves the JSON API consumed by the showroom frontend: car inventory,
//! accounts and email verification, site content, and dashboard stats.
//!
//! # Architecture
//!
//! - Axum web framework with JSON handlers
//! - File-backed JSON collections behind the [`store`] module (one file per
//!   collection, single-writer locking)
//! - SMTP delivery via lettre, with a log-only fallback for local work
//!
//! The binary in `main.rs` wires these together; everything else lives here
//! so the CLI and tests can reach it.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod fixtures;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
