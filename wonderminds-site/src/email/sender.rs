//! Email sender trait abstraction
//!
//! Every delivery backend implements [`EmailSender`]. Handlers only ever see
//! `Arc<dyn EmailSender>`, so tests can swap in a recording fake.

use async_trait::async_trait;

use super::{Email, EmailError};

/// Trait for sending emails
///
/// # Examples
///
/// ```rust,no_run
/// use wonderminds_site::email::{Email, EmailSender, SmtpBackend, SmtpConfig};
///
/// # async fn example(config: SmtpConfig) -> Result<(), Box<dyn std::error::Error>> {
/// let sender = SmtpBackend::new(config);
///
/// let email = Email::new()
///     .to("info@wonderminds.edu")
///     .from("website@wonderminds.edu")
///     .subject("Hello!")
///     .text("Hello, World!");
///
/// let message_id = sender.send(email).await?;
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send an email, returning the `Message-ID` it was sent with
    ///
    /// # Errors
    ///
    /// Returns `EmailError` if the email is invalid or delivery fails
    async fn send(&self, email: Email) -> Result<String, EmailError>;
}
