//! Veloce Server - Showroom HTTP API.
//!
//! Serves the JSON API for the showroom frontend on port 4000: car
//! inventory, accounts and email verification, site configuration, and
//! dashboard stats.
//!
//! # Architecture
//!
//! - Axum web framework with JSON handlers
//! - File-backed JSON collections, one file per collection under
//!   `VELOCE_DATA_DIR`, seeded from fixtures on first access
//! - SMTP email via lettre when configured, log-only otherwise

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use axum::ServiceExt;
use axum::extract::Request;
use sentry::integrations::tracing as sentry_tracing;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use veloce_server::config::ServerConfig;
use veloce_server::routes;
use veloce_server::services::EmailService;
use veloce_server::state::AppState;
use veloce_server::store::{FileStorage, Store};

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &ServerConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            traces_sample_rate: config.sentry_traces_sample_rate,
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    // Load configuration from environment (needed for Sentry init)
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Initialize tracing with EnvFilter and Sentry integration
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "veloce_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    // Open the collection store
    let storage = FileStorage::new(&config.data_dir).expect("Failed to open data directory");
    let store = Store::new(Arc::new(storage));
    tracing::info!(data_dir = %config.data_dir.display(), "Collection store ready");

    // Email transport: SMTP when configured, log-only otherwise
    let email = match &config.email {
        Some(email_config) => {
            EmailService::smtp(email_config).expect("Failed to build SMTP transport")
        }
        None => {
            tracing::info!("SMTP not configured, verification codes will be logged");
            EmailService::log_only()
        }
    };

    if let Some(latency) = config.simulated_latency {
        tracing::info!(min_ms = latency.min_ms, max_ms = latency.max_ms, "Simulated latency enabled");
    }

    // Build application state and router
    let state = AppState::new(config.clone(), store, email);

    let router = routes::router(state)
        .layer(TraceLayer::new_for_http())
        // The frontend is a browser SPA served from elsewhere
        .layer(CorsLayer::permissive())
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    // Trailing-slash trimming must wrap the router itself so it runs
    // before route matching
    let app = NormalizePathLayer::trim_trailing_slash().layer(router);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("veloce-server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
