//! Veloce Client - Typed HTTP client for the showroom API.
//!
//! Wraps every endpoint of `veloce-server` in a typed method on
//! [`ApiClient`]. Error responses are decoded from the server's JSON
//! `{"message": ...}` envelope into [`ApiError::Api`]; transport failures
//! (DNS, refused connections, the 30 s request timeout) surface as
//! [`ApiError::Http`].
//!
//! # Example
//!
//! ```rust,no_run
//! # async fn demo() -> Result<(), veloce_client::ApiError> {
//! let client = veloce_client::ApiClient::new("http://localhost:4000")?;
//! let cars = client.list_cars().await?;
//! println!("{} cars in the showroom", cars.len());
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

use veloce_core::{
    ApiMessage, AuthResponse, Car, CarId, CreateCar, DashboardStats, DeleteCarResponse,
    EmailOnlyRequest, HealthResponse, LoginRequest, ResetPasswordRequest, SignupRequest,
    SignupResponse, SiteConfig, UpdateCar, UpdateProfile, User, VerifyEmailRequest,
};

/// Request timeout applied to every call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fallback when an error body carries no usable message.
const GENERIC_ERROR: &str = "Something went wrong";

/// Errors returned by [`ApiClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: connection, DNS, timeout, or an
    /// undecodable success body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error status.
    #[error("API error ({status}): {message}")]
    Api {
        status: StatusCode,
        message: String,
    },
}

/// Typed client for the showroom API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against a base URL (without the `/api` prefix).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the underlying client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { client, base_url })
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Health
    // =========================================================================

    /// `GET /api/health`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-2xx response.
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.get("/health").await
    }

    // =========================================================================
    // Cars
    // =========================================================================

    /// `GET /api/cars`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-2xx response.
    pub async fn list_cars(&self) -> Result<Vec<Car>, ApiError> {
        self.get("/cars").await
    }

    /// `GET /api/cars/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` with status 404 for an unknown ID.
    pub async fn get_car(&self, id: &CarId) -> Result<Car, ApiError> {
        self.get(&format!("/cars/{id}")).await
    }

    /// `POST /api/cars`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` with status 409 on an ID collision.
    pub async fn create_car(&self, payload: &CreateCar) -> Result<Car, ApiError> {
        self.send_json(Method::POST, "/cars", payload).await
    }

    /// `PUT /api/cars/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` with status 404 for an unknown ID.
    pub async fn update_car(&self, id: &CarId, payload: &UpdateCar) -> Result<Car, ApiError> {
        self.send_json(Method::PUT, &format!("/cars/{id}"), payload)
            .await
    }

    /// `DELETE /api/cars/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` with status 404 for an unknown ID.
    pub async fn delete_car(&self, id: &CarId) -> Result<DeleteCarResponse, ApiError> {
        let request = self
            .client
            .request(Method::DELETE, self.url(&format!("/cars/{id}")));
        self.execute(request).await
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// `GET /api/users`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-2xx response.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get("/users").await
    }

    /// `PUT /api/users`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` with 404 for an unknown account or 409 when
    /// the new email is taken.
    pub async fn update_profile(&self, payload: &UpdateProfile) -> Result<User, ApiError> {
        self.send_json(Method::PUT, "/users", payload).await
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// `POST /api/auth/login`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` with 401 for bad credentials or 403 for an
    /// unverified account.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.send_json(
            Method::POST,
            "/auth/login",
            &LoginRequest {
                email: email.to_owned(),
                password: password.to_owned(),
            },
        )
        .await
    }

    /// `POST /api/auth/signup`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` with 409 when the email is registered.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<SignupResponse, ApiError> {
        self.send_json(
            Method::POST,
            "/auth/signup",
            &SignupRequest {
                name: name.to_owned(),
                email: email.to_owned(),
                password: password.to_owned(),
            },
        )
        .await
    }

    /// `POST /api/auth/verify`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` with 400 on a code mismatch.
    pub async fn verify_email(&self, email: &str, code: &str) -> Result<AuthResponse, ApiError> {
        self.send_json(
            Method::POST,
            "/auth/verify",
            &VerifyEmailRequest {
                email: email.to_owned(),
                code: code.to_owned(),
            },
        )
        .await
    }

    /// `POST /api/auth/resend-verification`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` with 400 when already verified.
    pub async fn resend_verification(&self, email: &str) -> Result<ApiMessage, ApiError> {
        self.send_json(
            Method::POST,
            "/auth/resend-verification",
            &EmailOnlyRequest {
                email: email.to_owned(),
            },
        )
        .await
    }

    /// `POST /api/auth/forgot-password`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` with 404 for an unknown email.
    pub async fn forgot_password(&self, email: &str) -> Result<ApiMessage, ApiError> {
        self.send_json(
            Method::POST,
            "/auth/forgot-password",
            &EmailOnlyRequest {
                email: email.to_owned(),
            },
        )
        .await
    }

    /// `POST /api/auth/reset-password`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` with 400 on a code mismatch.
    pub async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> Result<ApiMessage, ApiError> {
        self.send_json(
            Method::POST,
            "/auth/reset-password",
            &ResetPasswordRequest {
                email: email.to_owned(),
                code: code.to_owned(),
                new_password: new_password.to_owned(),
            },
        )
        .await
    }

    // =========================================================================
    // Site config & admin
    // =========================================================================

    /// `GET /api/config`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-2xx response.
    pub async fn get_config(&self) -> Result<SiteConfig, ApiError> {
        self.get("/config").await
    }

    /// `PUT /api/config`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-2xx response.
    pub async fn update_config(&self, payload: &SiteConfig) -> Result<SiteConfig, ApiError> {
        self.send_json(Method::PUT, "/config", payload).await
    }

    /// `DELETE /api/config`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-2xx response.
    pub async fn reset_config(&self) -> Result<SiteConfig, ApiError> {
        let request = self.client.request(Method::DELETE, self.url("/config"));
        self.execute(request).await
    }

    /// `GET /api/admin/stats`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-2xx response.
    pub async fn stats(&self) -> Result<DashboardStats, ApiError> {
        self.get("/admin/stats").await
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn url(&self, path: &str) -> String {
        format!("{}/api{path}", self.base_url)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.client.get(self.url(path));
        self.execute(request).await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let request = self.client.request(method, self.url(path)).json(body);
        self.execute(request).await
    }

    #[instrument(skip_all)]
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            debug!(%status, "Request succeeded");
            Ok(response.json().await?)
        } else {
            Err(Self::decode_error(status, response).await)
        }
    }

    /// Extract the server's `message` from an error body, falling back to a
    /// generic string when the body is not the expected envelope.
    async fn decode_error(status: StatusCode, response: Response) -> ApiError {
        let message = match response.json::<ApiMessage>().await {
            Ok(body) if !body.message.is_empty() => body.message,
            _ => GENERIC_ERROR.to_owned(),
        };
        debug!(%status, message = %message, "Request failed");
        ApiError::Api { status, message }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:4000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:4000");
        assert_eq!(client.url("/cars"), "http://localhost:4000/api/cars");
    }

    #[test]
    fn test_api_error_display_includes_status_and_message() {
        let err = ApiError::Api {
            status: StatusCode::NOT_FOUND,
            message: "Car not found".to_owned(),
        };
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("Car not found"));
    }
}
