//! Integration tests for Veloce.
//!
//! The tests in `tests/` exercise a running `veloce-server` end to end over
//! HTTP and are `#[ignore]`d by default.
//!
//! # Running Tests
//!
//! ```bash
//! # Start a throwaway server (fresh data directory recommended)
//! VELOCE_DATA_DIR=$(mktemp -d) cargo run -p veloce-server &
//!
//! # Run the ignored tests against it
//! VELOCE_BASE_URL=http://localhost:4000 \
//!     cargo test -p veloce-integration-tests -- --ignored
//! ```
//!
//! Auth-flow tests rely on the server running WITHOUT SMTP configured: the
//! log-only email transport means signup succeeds without real delivery,
//! and verification-code checks are driven through the wrong-code paths.

/// Base URL for the showroom API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("VELOCE_BASE_URL").unwrap_or_else(|_| "http://localhost:4000".to_owned())
}

/// A fresh email address that cannot collide with earlier runs.
#[must_use]
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", uuid::Uuid::new_v4().simple())
}
