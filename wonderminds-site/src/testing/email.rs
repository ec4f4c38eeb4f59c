//! Email senders for tests

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::email::{message_id_for, Email, EmailError, EmailSender};

/// Email sender that records instead of sending
///
/// Clones share the same record, so keep one clone for assertions and hand
/// the other to the application.
///
/// ```rust
/// use wonderminds_site::email::{Email, EmailSender};
/// use wonderminds_site::testing::MockEmailSender;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mock = MockEmailSender::new();
///
/// let email = Email::new()
///     .to("parent@example.com")
///     .from("website@wonderminds.edu")
///     .subject("Visit Request Received")
///     .text("Hello");
///
/// mock.send(email).await?;
///
/// assert_eq!(mock.sent_count(), 1);
/// assert!(mock.was_sent_to("parent@example.com"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockEmailSender {
    sent: Arc<Mutex<Vec<Email>>>,
}

impl MockEmailSender {
    /// Create a new recording sender
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn sent(&self) -> MutexGuard<'_, Vec<Email>> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of emails sent
    #[must_use]
    pub fn sent_count(&self) -> usize {
        self.sent().len()
    }

    /// All sent emails, oldest first
    #[must_use]
    pub fn sent_emails(&self) -> Vec<Email> {
        self.sent().clone()
    }

    /// Forget everything sent so far
    pub fn clear(&self) {
        self.sent().clear();
    }

    /// Whether any email went to `address`
    #[must_use]
    pub fn was_sent_to(&self, address: &str) -> bool {
        self.sent()
            .iter()
            .any(|email| email.to.iter().any(|to| to == address))
    }

    /// Whether any email carried exactly `subject`
    #[must_use]
    pub fn was_sent_with_subject(&self, subject: &str) -> bool {
        self.sent()
            .iter()
            .any(|email| email.subject.as_deref() == Some(subject))
    }

    /// The most recent email
    #[must_use]
    pub fn last_sent(&self) -> Option<Email> {
        self.sent().last().cloned()
    }

    /// The first email
    #[must_use]
    pub fn first_sent(&self) -> Option<Email> {
        self.sent().first().cloned()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send(&self, email: Email) -> Result<String, EmailError> {
        email.validate()?;

        let message_id = message_id_for(email.from.as_deref().unwrap_or_default());
        self.sent().push(email);

        Ok(message_id)
    }
}

/// Email sender that reports a transport failure
///
/// With [`FailingEmailSender::after`] the first sends succeed and are
/// recorded, which covers the two-email flows failing halfway.
#[derive(Debug, Clone)]
pub struct FailingEmailSender {
    recorder: MockEmailSender,
    successes: usize,
    error: String,
}

impl FailingEmailSender {
    /// Fail every send with `error` as the SMTP error text
    #[must_use]
    pub fn new(error: &str) -> Self {
        Self {
            recorder: MockEmailSender::new(),
            successes: 0,
            error: error.to_string(),
        }
    }

    /// Let the first `successes` sends through
    #[must_use]
    pub const fn after(mut self, successes: usize) -> Self {
        self.successes = successes;
        self
    }

    /// Emails that went through before the failures began
    #[must_use]
    pub fn delivered(&self) -> &MockEmailSender {
        &self.recorder
    }
}

#[async_trait]
impl EmailSender for FailingEmailSender {
    async fn send(&self, email: Email) -> Result<String, EmailError> {
        if self.recorder.sent_count() < self.successes {
            return self.recorder.send(email).await;
        }

        Err(EmailError::smtp(self.error.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(to: &str, subject: &str) -> Email {
        Email::new()
            .to(to)
            .from("WonderMinds Website <website@wonderminds.edu>")
            .subject(subject)
            .text("Hello")
    }

    #[tokio::test]
    async fn test_records_in_order() {
        let mock = MockEmailSender::new();

        mock.send(email("admin@wonderminds.edu", "New Visit Request"))
            .await
            .unwrap();
        let id = mock
            .send(email("parent@example.com", "Visit Request Received"))
            .await
            .unwrap();

        assert_eq!(mock.sent_count(), 2);
        assert!(id.ends_with("@wonderminds.edu>"));
        assert!(mock.was_sent_with_subject("New Visit Request"));
        assert_eq!(mock.first_sent().unwrap().to, vec!["admin@wonderminds.edu"]);
        assert_eq!(mock.last_sent().unwrap().to, vec!["parent@example.com"]);

        mock.clear();
        assert_eq!(mock.sent_count(), 0);
    }

    #[tokio::test]
    async fn test_clones_share_record() {
        let mock = MockEmailSender::new();
        let handle = mock.clone();

        handle.send(email("info@wonderminds.edu", "Hi")).await.unwrap();

        assert!(mock.was_sent_to("info@wonderminds.edu"));
    }

    #[tokio::test]
    async fn test_rejects_invalid_email() {
        let mock = MockEmailSender::new();

        let result = mock.send(Email::new().subject("No recipient").text("x")).await;

        assert!(matches!(result, Err(EmailError::NoRecipients)));
        assert_eq!(mock.sent_count(), 0);
    }

    #[tokio::test]
    async fn test_failing_after_successes() {
        let sender = FailingEmailSender::new("connection refused").after(1);

        assert!(sender.send(email("admin@wonderminds.edu", "A")).await.is_ok());
        let err = sender
            .send(email("parent@example.com", "B"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("connection refused"));
        assert_eq!(sender.delivered().sent_count(), 1);
    }
}
