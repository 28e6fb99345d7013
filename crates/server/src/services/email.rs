//! Email service for sending verification and password reset codes.
//!
//! Uses SMTP via lettre when configured; without SMTP settings the service
//! falls back to logging the code, which keeps local development and demos
//! working with no mail infrastructure.

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use secrecy::ExposeSecret;
use thiserror::Error;

use crate::config::EmailConfig;

/// Errors that can occur when sending email.
#[derive(Debug, Error)]
pub enum EmailError {
    /// SMTP transport error.
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    /// Failed to build email message.
    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
}

/// Email service for sending transactional emails.
#[derive(Clone)]
pub struct EmailService {
    transport: Transport,
}

#[derive(Clone)]
enum Transport {
    Smtp {
        mailer: AsyncSmtpTransport<Tokio1Executor>,
        from_address: String,
    },
    /// No SMTP configured: log the code instead of sending it.
    LogOnly,
}

impl EmailService {
    /// Create a service that delivers over SMTP.
    ///
    /// # Errors
    ///
    /// Returns error if the relay address cannot be resolved.
    pub fn smtp(config: &EmailConfig) -> Result<Self, SmtpError> {
        let credentials = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.expose_secret().to_owned(),
        );

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self {
            transport: Transport::Smtp {
                mailer,
                from_address: config.from_address.clone(),
            },
        })
    }

    /// Create a service that logs codes instead of sending them.
    #[must_use]
    pub const fn log_only() -> Self {
        Self {
            transport: Transport::LogOnly,
        }
    }

    /// Send an email verification code.
    ///
    /// # Errors
    ///
    /// Returns error if the email fails to send.
    pub async fn send_verification_code(&self, to: &str, code: &str) -> Result<(), EmailError> {
        let body = format!(
            "Your Veloce verification code is {code}.\n\n\
             Enter it on the verification screen to activate your account.\n\
             If you did not sign up, you can ignore this email.\n"
        );
        self.send(to, "Your Veloce verification code", &body, code)
            .await
    }

    /// Send a password reset code.
    ///
    /// # Errors
    ///
    /// Returns error if the email fails to send.
    pub async fn send_password_reset_code(&self, to: &str, code: &str) -> Result<(), EmailError> {
        let body = format!(
            "Your Veloce password reset code is {code}.\n\n\
             Enter it together with your new password to finish the reset.\n\
             If you did not request a reset, you can ignore this email.\n"
        );
        self.send(to, "Reset your Veloce password", &body, code)
            .await
    }

    async fn send(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        code: &str,
    ) -> Result<(), EmailError> {
        match &self.transport {
            Transport::Smtp {
                mailer,
                from_address,
            } => {
                let email = Message::builder()
                    .from(
                        from_address
                            .parse()
                            .map_err(|_| EmailError::InvalidAddress(from_address.clone()))?,
                    )
                    .to(to
                        .parse()
                        .map_err(|_| EmailError::InvalidAddress(to.to_owned()))?)
                    .subject(subject)
                    .body(body.to_owned())?;

                mailer.send(email).await?;
                tracing::info!(to = %to, subject = %subject, "Email sent successfully");
                Ok(())
            }
            Transport::LogOnly => {
                tracing::info!(to = %to, code = %code, "SMTP not configured, logging code instead of sending");
                Ok(())
            }
        }
    }
}

/// Generate a 6-digit verification code.
#[must_use]
pub fn generate_verification_code() -> String {
    use rand::Rng;
    let code: u32 = rand::rng().random_range(100_000..1_000_000);
    code.to_string()
}
