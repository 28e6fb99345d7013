//! Dashboard aggregates from a running server.

use thiserror::Error;

use veloce_client::{ApiClient, ApiError};

/// Errors that can occur fetching stats.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The server request failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

/// Fetch and log `/api/admin/stats` from `VELOCE_BASE_URL`.
///
/// # Errors
///
/// Returns `StatsError` when the server is unreachable or answers with an
/// error status.
pub async fn show() -> Result<(), StatsError> {
    let _ = dotenvy::dotenv();
    let base_url =
        std::env::var("VELOCE_BASE_URL").unwrap_or_else(|_| "http://localhost:4000".to_owned());

    let client = ApiClient::new(&base_url)?;
    let stats = client.stats().await?;

    tracing::info!(
        total_inventory = stats.total_inventory,
        total_users = stats.total_users,
        portfolio_value = stats.portfolio_value,
        active_orders = stats.active_orders,
        "Dashboard stats from {base_url}"
    );
    Ok(())
}
