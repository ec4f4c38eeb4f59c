//! Email builder with fluent API

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::{EmailError, EmailTemplate};

/// An email message
///
/// ```rust
/// use wonderminds_site::email::Email;
///
/// let email = Email::new()
///     .to("info@wonderminds.edu")
///     .from("WonderMinds Website <website@wonderminds.edu>")
///     .reply_to("parent@example.com")
///     .subject("New Contact Form Submission from Jane Doe")
///     .html("<p>Hello</p>");
///
/// assert!(email.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Email {
    /// Email recipients (To)
    pub to: Vec<String>,

    /// Email sender (From)
    pub from: Option<String>,

    /// Reply-To address
    pub reply_to: Option<String>,

    /// Email subject
    pub subject: Option<String>,

    /// Plain text body
    pub text: Option<String>,

    /// HTML body
    pub html: Option<String>,

    /// Extra headers, e.g. `X-Form-Source`
    pub headers: BTreeMap<String, String>,
}

impl Email {
    /// Create a new empty email
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an email whose bodies come from a template
    ///
    /// # Errors
    ///
    /// Returns `EmailError::TemplateError` if the template fails to render
    pub fn from_template<T: EmailTemplate>(template: &T) -> Result<Self, EmailError> {
        let (html, text) = template.render_email()?;

        let mut email = Self::new();
        if let Some(html_content) = html {
            email = email.html(&html_content);
        }
        if let Some(text_content) = text {
            email = email.text(&text_content);
        }

        Ok(email)
    }

    /// Add a recipient (To)
    #[must_use]
    pub fn to(mut self, address: &str) -> Self {
        self.to.push(address.to_string());
        self
    }

    /// Set the sender (From)
    #[must_use]
    pub fn from(mut self, address: &str) -> Self {
        self.from = Some(address.to_string());
        self
    }

    /// Set the reply-to address
    #[must_use]
    pub fn reply_to(mut self, address: &str) -> Self {
        self.reply_to = Some(address.to_string());
        self
    }

    /// Set the email subject
    #[must_use]
    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the plain text body
    #[must_use]
    pub fn text(mut self, body: &str) -> Self {
        self.text = Some(body.to_string());
        self
    }

    /// Set the HTML body
    #[must_use]
    pub fn html(mut self, body: &str) -> Self {
        self.html = Some(body.to_string());
        self
    }

    /// Add a custom header
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    /// Validate the email
    ///
    /// # Errors
    ///
    /// Returns errors if:
    /// - No recipients
    /// - No sender
    /// - No subject
    /// - No content (text or HTML)
    pub fn validate(&self) -> Result<(), EmailError> {
        if self.to.is_empty() {
            return Err(EmailError::NoRecipients);
        }

        if self.from.is_none() {
            return Err(EmailError::NoSender);
        }

        if self.subject.is_none() {
            return Err(EmailError::NoSubject);
        }

        if self.text.is_none() && self.html.is_none() {
            return Err(EmailError::NoContent);
        }

        Ok(())
    }
}

/// Generate a `Message-ID` in the sender's domain
///
/// Accepts either a bare address or a `Name <address>` mailbox.
///
/// ```rust
/// use wonderminds_site::email::message_id_for;
///
/// let id = message_id_for("WonderMinds Website <website@wonderminds.edu>");
/// assert!(id.starts_with('<'));
/// assert!(id.ends_with("@wonderminds.edu>"));
/// ```
#[must_use]
pub fn message_id_for(sender: &str) -> String {
    let domain = sender
        .rsplit_once('@')
        .map(|(_, domain)| domain.trim_end_matches('>').trim())
        .filter(|domain| !domain.is_empty())
        .unwrap_or("localhost");

    format!("<{}@{domain}>", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_builder() {
        let email = Email::new()
            .to("info@wonderminds.edu")
            .from("website@wonderminds.edu")
            .reply_to("parent@example.com")
            .subject("Test")
            .html("<p>Hello</p>");

        assert_eq!(email.to, vec!["info@wonderminds.edu"]);
        assert_eq!(email.from.as_deref(), Some("website@wonderminds.edu"));
        assert_eq!(email.reply_to.as_deref(), Some("parent@example.com"));
        assert_eq!(email.subject.as_deref(), Some("Test"));
        assert_eq!(email.html.as_deref(), Some("<p>Hello</p>"));
        assert!(email.text.is_none());
        assert!(email.headers.is_empty());
    }

    #[test]
    fn test_custom_headers() {
        let email = Email::new()
            .header("X-Form-Source", "contact")
            .header("X-Form-Source", "booking");

        assert_eq!(email.headers.len(), 1);
        assert_eq!(email.headers["X-Form-Source"], "booking");
    }

    #[test]
    fn test_email_validation_no_recipients() {
        let email = Email::new()
            .from("website@wonderminds.edu")
            .subject("Test")
            .text("Hello");

        assert!(matches!(email.validate(), Err(EmailError::NoRecipients)));
    }

    #[test]
    fn test_serialized_fields() {
        let email = Email::new()
            .to("info@wonderminds.edu")
            .from("website@wonderminds.edu")
            .subject("Test")
            .text("Hello");

        let json = serde_json::to_value(&email).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();

        assert_eq!(
            keys,
            ["from", "headers", "html", "reply_to", "subject", "text", "to"]
        );
    }

    #[test]
    fn test_email_validation_no_sender() {
        let email = Email::new()
            .to("info@wonderminds.edu")
            .subject("Test")
            .text("Hello");

        assert!(matches!(email.validate(), Err(EmailError::NoSender)));
    }

    #[test]
    fn test_email_validation_no_subject() {
        let email = Email::new()
            .to("info@wonderminds.edu")
            .from("website@wonderminds.edu")
            .text("Hello");

        assert!(matches!(email.validate(), Err(EmailError::NoSubject)));
    }

    #[test]
    fn test_email_validation_no_content() {
        let email = Email::new()
            .to("info@wonderminds.edu")
            .from("website@wonderminds.edu")
            .subject("Test");

        assert!(matches!(email.validate(), Err(EmailError::NoContent)));
    }

    #[test]
    fn test_message_id_domain() {
        assert!(message_id_for("website@wonderminds.edu").ends_with("@wonderminds.edu>"));
        assert!(message_id_for("Site <a@b.org>").ends_with("@b.org>"));
        assert!(message_id_for("not-an-address").ends_with("@localhost>"));
    }

    #[test]
    fn test_message_ids_are_unique() {
        let first = message_id_for("website@wonderminds.edu");
        let second = message_id_for("website@wonderminds.edu");
        assert_ne!(first, second);
    }
}
