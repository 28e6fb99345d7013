//! HTTP middleware for the showroom API.

pub mod latency;
pub mod request_id;

pub use latency::simulated_latency_middleware;
pub use request_id::request_id_middleware;
