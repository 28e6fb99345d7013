//! HTTP route handlers for the showroom API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /api/health                    - Health check
//!
//! # Cars
//! GET    /api/cars                      - List inventory (newest first)
//! POST   /api/cars                      - Create car (201, 409 on id collision)
//! GET    /api/cars/{id}                 - Fetch car
//! PUT    /api/cars/{id}                 - Merge update into car
//! DELETE /api/cars/{id}                 - Delete car
//!
//! # Users
//! GET    /api/users                     - List accounts (public views)
//! PUT    /api/users                     - Update profile
//!
//! # Auth
//! POST   /api/auth/login                - Login, returns {user, token}
//! POST   /api/auth/signup               - Signup, verification pending
//! POST   /api/auth/verify               - Confirm code, returns {user, token}
//! POST   /api/auth/resend-verification  - Re-send a verification code
//! POST   /api/auth/forgot-password      - Start a password reset
//! POST   /api/auth/reset-password       - Finish a password reset
//!
//! # Site config & admin
//! GET    /api/config                    - Fetch site configuration
//! PUT    /api/config                    - Replace site configuration
//! DELETE /api/config                    - Reset to shipped defaults
//! GET    /api/admin/stats               - Dashboard aggregates
//! ```
//!
//! Anything else is a 404 with `{"message": "Endpoint <path> not found"}`.

pub mod auth;
pub mod cars;
pub mod config;
pub mod health;
pub mod stats;
pub mod users;

use axum::{
    Router,
    http::Uri,
    middleware,
    routing::{get, post},
};

use crate::error::AppError;
use crate::middleware::{request_id_middleware, simulated_latency_middleware};
use crate::state::AppState;

/// Create the auth routes router.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/signup", post(auth::signup))
        .route("/verify", post(auth::verify))
        .route("/resend-verification", post(auth::resend_verification))
        .route("/forgot-password", post(auth::forgot_password))
        .route("/reset-password", post(auth::reset_password))
}

/// Build the application router.
///
/// Observability layers (tracing, CORS, Sentry) are applied by the binary;
/// this router carries the routes plus the request-id and simulated-latency
/// middleware so tests exercise the same stack.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health::health))
        .route("/cars", get(cars::list).post(cars::create))
        .route(
            "/cars/{id}",
            get(cars::get).put(cars::update).delete(cars::delete),
        )
        .route("/users", get(users::list).put(users::update_profile))
        .nest("/auth", auth_routes())
        .route(
            "/config",
            get(config::get).put(config::update).delete(config::reset),
        )
        .route("/admin/stats", get(stats::stats));

    Router::new()
        .nest("/api", api)
        .fallback(fallback)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            simulated_latency_middleware,
        ))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// 404 handler carrying the `/api`-relative path in the message.
async fn fallback(uri: Uri) -> AppError {
    let path = uri.path();
    let endpoint = path.strip_prefix("/api").filter(|p| !p.is_empty()).unwrap_or(path);
    AppError::NotFound(format!("Endpoint {endpoint} not found"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::config::ServerConfig;
    use crate::services::EmailService;
    use crate::store::{MemoryStorage, Store};

    use super::*;

    fn test_state() -> AppState {
        let config = ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            data_dir: PathBuf::from("unused"),
            simulated_latency: None,
            email: None,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.1,
        };
        let store = Store::new(Arc::new(MemoryStorage::new()));
        AppState::new(config, store, EmailService::log_only())
    }

    fn app() -> Router {
        router(test_state())
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get_request(path: &str) -> Request<Body> {
        Request::get(path).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, path: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let (status, body) = send(app(), get_request("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert!(body.get("timestamp").is_some());
    }

    #[tokio::test]
    async fn test_unknown_endpoint_is_404_with_path() {
        let (status, body) = send(app(), get_request("/api/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Endpoint /nope not found");
    }

    #[tokio::test]
    async fn test_create_car_coerces_non_numeric_price() {
        let (status, body) = send(
            app(),
            json_request("POST", "/api/cars", &json!({"name": "X", "priceValue": "abc"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["priceValue"], 0);
        assert_eq!(body["name"], "X");
    }

    #[tokio::test]
    async fn test_create_car_with_taken_id_conflicts() {
        let app = app();
        let (_, _) = send(app.clone(), get_request("/api/cars")).await; // seed
        let (status, body) = send(
            app,
            json_request("POST", "/api/cars", &json!({"id": "phantom-gt", "name": "Dup"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body["message"].as_str().unwrap().contains("phantom-gt"));
    }

    #[tokio::test]
    async fn test_delete_missing_car_is_404_and_harmless() {
        let app = app();
        let (status, body) = send(
            app.clone(),
            Request::delete("/api/cars/ghost").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Car not found");

        let (_, cars) = send(app, get_request("/api/cars")).await;
        assert_eq!(cars.as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_login_with_empty_password_is_401() {
        let (status, body) = send(
            app(),
            json_request(
                "POST",
                "/api/auth/login",
                &json!({"email": "admin@veloce.dev", "password": ""}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_signup_then_case_variant_signup_conflicts() {
        let app = app();
        let payload = json!({
            "name": "Jo",
            "email": "jo@example.com",
            "password": "password123",
        });
        let (status, body) = send(app.clone(), json_request("POST", "/api/auth/signup", &payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["requiresVerification"], true);
        assert_eq!(body["email"], "jo@example.com");

        let dup = json!({
            "name": "Jo Again",
            "email": "JO@Example.COM",
            "password": "password123",
        });
        let (status, _) = send(app, json_request("POST", "/api/auth/signup", &dup)).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_verify_with_wrong_code_is_400() {
        let app = app();
        let signup = json!({
            "name": "Jo",
            "email": "jo@example.com",
            "password": "password123",
        });
        send(app.clone(), json_request("POST", "/api/auth/signup", &signup)).await;

        let (status, body) = send(
            app.clone(),
            json_request(
                "POST",
                "/api/auth/verify",
                &json!({"email": "jo@example.com", "code": "000000"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid verification code");

        // Still unverified: login stays gated.
        let (status, _) = send(
            app,
            json_request(
                "POST",
                "/api/auth/login",
                &json!({"email": "jo@example.com", "password": "password123"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_users_list_strips_credentials() {
        let (status, body) = send(app(), get_request("/api/users")).await;
        assert_eq!(status, StatusCode::OK);
        let users = body.as_array().unwrap();
        assert_eq!(users.len(), 1);
        assert!(users[0].get("passwordHash").is_none());
        assert!(users[0].get("verificationCode").is_none());
    }

    #[tokio::test]
    async fn test_config_reset_restores_defaults() {
        let app = app();
        let (_, mut config) = send(app.clone(), get_request("/api/config")).await;
        let default_name = config["siteName"].clone();

        config["siteName"] = json!("Renamed");
        let (status, updated) = send(app.clone(), json_request("PUT", "/api/config", &config)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["siteName"], "Renamed");

        let (status, reset) = send(
            app.clone(),
            Request::delete("/api/config").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(reset["siteName"], default_name);

        let (_, fetched) = send(app, get_request("/api/config")).await;
        assert_eq!(fetched, reset);
    }

    #[tokio::test]
    async fn test_stats_aggregates_fixtures() {
        let (status, body) = send(app(), get_request("/api/admin/stats")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalInventory"], 6);
        assert_eq!(body["totalUsers"], 1);
        assert_eq!(body["portfolioValue"], 3_729_000);
        assert_eq!(body["activeOrders"], 3);
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let response = app()
            .oneshot(get_request("/api/health"))
            .await
            .unwrap();
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_update_profile_merges_avatar() {
        let (status, body) = send(
            app(),
            json_request(
                "PUT",
                "/api/users",
                &json!({"id": "admin-1", "avatar": "https://example.com/new.png"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["avatar"], "https://example.com/new.png");
    }

    #[tokio::test]
    async fn test_update_profile_conflict_and_not_found() {
        let app = app();
        let (status, _) = send(
            app.clone(),
            json_request("PUT", "/api/users", &json!({"id": "ghost", "name": "X"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // Renaming the admin onto its own email is fine.
        let (status, body) = send(
            app,
            json_request(
                "PUT",
                "/api/users",
                &json!({"id": "admin-1", "name": "Head Office"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Head Office");
    }
}
