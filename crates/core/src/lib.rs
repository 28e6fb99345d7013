//! Veloce Core - Shared types library.
//!
//! This crate provides common types used across all Veloce components:
//! - `server` - The showroom HTTP API
//! - `client` - Typed HTTP client for the API
//! - `cli` - Command-line tools for seeding and management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and roles
//! - [`car`] - Showroom inventory records and their write payloads
//! - [`user`] - Public account views and profile updates
//! - [`site`] - Site-wide content configuration
//! - [`auth`] - Request and response bodies for the auth endpoints
//! - [`stats`] - Dashboard aggregates
//! - [`api`] - Small envelopes shared by several endpoints

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod auth;
pub mod car;
pub mod site;
pub mod stats;
pub mod types;
pub mod user;

pub use api::*;
pub use auth::*;
pub use car::*;
pub use site::*;
pub use stats::*;
pub use types::*;
pub use user::*;
