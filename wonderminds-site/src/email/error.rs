//! Email error types

use thiserror::Error;

/// Errors that can occur while building or delivering an email
#[derive(Debug, Error)]
pub enum EmailError {
    /// Email has no recipients
    #[error("email must have at least one recipient")]
    NoRecipients,

    /// Email has no sender
    #[error("email must have a from address")]
    NoSender,

    /// Email has no subject
    #[error("email must have a subject")]
    NoSubject,

    /// Email has no body content
    #[error("email must have either text or HTML content")]
    NoContent,

    /// Address could not be parsed as a mailbox
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    /// Template rendering error
    #[error("failed to render email template: {0}")]
    TemplateError(#[from] askama::Error),

    /// SMTP transport error (connection, TLS, authentication, rejection)
    #[error("SMTP error: {0}")]
    SmtpError(String),

    /// Mail configuration error
    #[error("email configuration error: {0}")]
    ConfigError(String),
}

impl EmailError {
    /// Create an SMTP error from a string message
    #[must_use]
    pub fn smtp<T: Into<String>>(msg: T) -> Self {
        Self::SmtpError(msg.into())
    }

    /// Create a configuration error from a string message
    #[must_use]
    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::ConfigError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EmailError::smtp("connection refused").to_string(),
            "SMTP error: connection refused"
        );
        assert_eq!(
            EmailError::config("missing password").to_string(),
            "email configuration error: missing password"
        );
        assert_eq!(
            EmailError::InvalidAddress("nobody".to_string()).to_string(),
            "invalid email address: nobody"
        );
    }
}
