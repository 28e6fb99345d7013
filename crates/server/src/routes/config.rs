//! Site configuration handlers.

use axum::{Json, extract::State};

use veloce_core::SiteConfig;

use crate::error::Result;
use crate::state::AppState;

/// Fetch the site configuration, seeding defaults on first read.
pub async fn get(State(state): State<AppState>) -> Json<SiteConfig> {
    Json(state.site_config().get())
}

/// Replace the site configuration wholesale.
///
/// # Errors
///
/// Returns 500 if the document cannot be persisted.
pub async fn update(
    State(state): State<AppState>,
    Json(payload): Json<SiteConfig>,
) -> Result<Json<SiteConfig>> {
    let config = state.site_config().replace(payload)?;
    tracing::info!("Site configuration updated");
    Ok(Json(config))
}

/// Reset the site configuration to the shipped defaults.
///
/// Responds with the re-seeded document so clients get the post-reset
/// state in one round trip.
///
/// # Errors
///
/// Returns 500 if the document cannot be persisted.
pub async fn reset(State(state): State<AppState>) -> Result<Json<SiteConfig>> {
    let config = state.site_config().reset()?;
    tracing::info!("Site configuration reset to defaults");
    Ok(Json(config))
}
