//! Business logic services.
//!
//! Services sit between route handlers and repositories: handlers parse the
//! request, services own the rules, repositories own the records.

pub mod auth;
pub mod email;

pub use auth::{AuthError, AuthService};
pub use email::EmailService;
