//! Console backend for development
//!
//! Logs emails instead of delivering them, so the forms can be exercised
//! locally without SMTP credentials.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::email::{message_id_for, Email, EmailError, EmailSender};

/// Console email backend for development
///
/// # Examples
///
/// ```rust
/// use wonderminds_site::email::{ConsoleBackend, Email, EmailSender};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let backend = ConsoleBackend::new();
///
/// let email = Email::new()
///     .to("info@wonderminds.edu")
///     .from("website@wonderminds.edu")
///     .subject("Hello!")
///     .text("Hello, World!");
///
/// let message_id = backend.send(email).await?;
/// assert!(message_id.ends_with("@wonderminds.edu>"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConsoleBackend {
    /// Whether to log email bodies at debug level
    verbose: bool,
}

impl ConsoleBackend {
    /// Create a new console backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a console backend that also logs message bodies
    #[must_use]
    pub const fn verbose() -> Self {
        Self { verbose: true }
    }
}

#[async_trait]
impl EmailSender for ConsoleBackend {
    async fn send(&self, email: Email) -> Result<String, EmailError> {
        email.validate()?;

        let from = email.from.as_ref().ok_or(EmailError::NoSender)?;
        let subject = email.subject.as_ref().ok_or(EmailError::NoSubject)?;
        let message_id = message_id_for(from);

        info!(
            message_id = %message_id,
            from = %from,
            to = ?email.to,
            reply_to = ?email.reply_to,
            headers = ?email.headers,
            subject = %subject,
            "Console email sent"
        );

        if self.verbose {
            if let Some(text) = &email.text {
                debug!(message_id = %message_id, text = %text, "Email text content");
            }

            if let Some(html) = &email.html {
                debug!(message_id = %message_id, html = %html, "Email HTML content");
            }
        }

        Ok(message_id)
    }
}
