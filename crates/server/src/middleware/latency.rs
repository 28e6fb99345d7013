//! Simulated-latency middleware.
//!
//! The showroom frontend was originally built against a mock backend that
//! delayed every call by 300-700 ms, and some of its loading states only
//! show up under that kind of delay. Setting `VELOCE_SIMULATED_LATENCY_MS`
//! restores the effect for demos; unset, requests pass straight through.

use std::time::Duration;

use axum::{extract::Request, extract::State, middleware::Next, response::Response};
use rand::Rng;

use crate::state::AppState;

/// Middleware that sleeps a uniformly random duration before each request.
///
/// Active only when the configuration carries latency bounds.
pub async fn simulated_latency_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(latency) = state.config().simulated_latency {
        let delay_ms = rand::rng().random_range(latency.range());
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }

    next.run(request).await
}
