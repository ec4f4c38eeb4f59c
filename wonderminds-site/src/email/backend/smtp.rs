//! SMTP backend for sending emails
//!
//! Uses the `lettre` crate to send emails via SMTP servers.

use async_trait::async_trait;
use lettre::{
    message::{
        header::{self, HeaderName, HeaderValue},
        Mailbox, MultiPart, SinglePart,
    },
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::config::{non_empty, MailSettings};
use crate::email::{message_id_for, Email, EmailError, EmailSender};

/// Port that speaks TLS from the first byte
const IMPLICIT_TLS_PORT: u16 = 465;

/// How the SMTP connection is secured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpTls {
    /// TLS from connect (port 465)
    Implicit,
    /// Plain connect upgraded with STARTTLS
    StartTls,
    /// No encryption, local relays only
    None,
}

impl SmtpTls {
    /// Pick the security mode for a relay
    ///
    /// Loopback relays (local mail catchers) are spoken to in plain text.
    /// Otherwise implicit TLS on port 465 and STARTTLS everywhere else.
    #[must_use]
    pub fn for_relay(host: &str, port: u16) -> Self {
        if matches!(host, "localhost" | "127.0.0.1" | "::1") {
            Self::None
        } else if port == IMPLICIT_TLS_PORT {
            Self::Implicit
        } else {
            Self::StartTls
        }
    }
}

/// SMTP email backend configuration
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server hostname
    pub host: String,

    /// SMTP server port
    pub port: u16,

    /// SMTP username
    pub username: String,

    /// SMTP password
    pub password: String,

    /// Connection security
    pub tls: SmtpTls,
}

impl SmtpConfig {
    /// Build SMTP configuration from the site's mail settings
    ///
    /// # Errors
    ///
    /// Returns `EmailError::ConfigError` if host, username or password is missing
    pub fn from_settings(settings: &MailSettings) -> Result<Self, EmailError> {
        let host = settings.host.trim();
        if host.is_empty() {
            return Err(EmailError::config("mail host is not set"));
        }

        let username = non_empty(settings.username.as_deref())
            .ok_or_else(|| EmailError::config("mail username is not set"))?;
        let password = non_empty(settings.password.as_deref())
            .ok_or_else(|| EmailError::config("mail password is not set"))?;

        Ok(Self {
            host: host.to_string(),
            port: settings.port,
            username: username.to_string(),
            password: password.to_string(),
            tls: SmtpTls::for_relay(host, settings.port),
        })
    }
}

/// SMTP email backend
///
/// # Examples
///
/// ```rust,no_run
/// use wonderminds_site::config::MailSettings;
/// use wonderminds_site::email::{Email, EmailSender, SmtpBackend, SmtpConfig};
///
/// # async fn example(settings: MailSettings) -> Result<(), Box<dyn std::error::Error>> {
/// let backend = SmtpBackend::new(SmtpConfig::from_settings(&settings)?);
///
/// let email = Email::new()
///     .to("info@wonderminds.edu")
///     .from(&settings.sender())
///     .subject("Hello!")
///     .text("Hello, World!");
///
/// let message_id = backend.send(email).await?;
/// # Ok(())
/// # }
/// ```
pub struct SmtpBackend {
    config: SmtpConfig,
}

impl SmtpBackend {
    /// Create a new SMTP backend with the given configuration
    #[must_use]
    pub const fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Create a new SMTP backend from the site's mail settings
    ///
    /// # Errors
    ///
    /// Returns `EmailError::ConfigError` if credentials are missing
    pub fn from_settings(settings: &MailSettings) -> Result<Self, EmailError> {
        SmtpConfig::from_settings(settings).map(Self::new)
    }

    fn mailbox(address: &str) -> Result<Mailbox, EmailError> {
        address
            .parse()
            .map_err(|_| EmailError::InvalidAddress(address.to_string()))
    }

    /// Build lettre Message from Email
    fn build_message(email: &Email, message_id: String) -> Result<Message, EmailError> {
        email.validate()?;

        let from = email.from.as_deref().ok_or(EmailError::NoSender)?;
        let mut builder = Message::builder()
            .from(Self::mailbox(from)?)
            .message_id(Some(message_id));

        for to in &email.to {
            builder = builder.to(Self::mailbox(to)?);
        }

        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(Self::mailbox(reply_to)?);
        }

        let subject = email.subject.as_ref().ok_or(EmailError::NoSubject)?;
        builder = builder.subject(subject);

        for (name, value) in &email.headers {
            let name = HeaderName::new_from_ascii(name.clone())
                .map_err(|_| EmailError::smtp(format!("invalid header name: {name}")))?;
            builder = builder.raw_header(HeaderValue::new(name, value.clone()));
        }

        let message = match (&email.html, &email.text) {
            (Some(html), Some(text)) => builder.multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_PLAIN)
                            .body(text.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_HTML)
                            .body(html.clone()),
                    ),
            ),
            (Some(html), None) => builder
                .header(header::ContentType::TEXT_HTML)
                .body(html.clone()),
            (None, Some(text)) => builder
                .header(header::ContentType::TEXT_PLAIN)
                .body(text.clone()),
            (None, None) => return Err(EmailError::NoContent),
        };

        message.map_err(|e| EmailError::smtp(e.to_string()))
    }

    /// Create SMTP transport from config
    fn create_transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
        let credentials =
            Credentials::new(self.config.username.clone(), self.config.password.clone());

        let transport = match self.config.tls {
            SmtpTls::Implicit => AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.host)
                .map_err(|e| EmailError::smtp(e.to_string()))?,
            SmtpTls::StartTls => {
                let tls_parameters = TlsParameters::new(self.config.host.clone())
                    .map_err(|e| EmailError::smtp(format!("TLS parameters error: {e}")))?;

                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)
                    .map_err(|e| EmailError::smtp(e.to_string()))?
                    .tls(Tls::Required(tls_parameters))
            }
            SmtpTls::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(
                &self.config.host,
            ),
        };

        Ok(transport
            .credentials(credentials)
            .port(self.config.port)
            .build())
    }
}

#[async_trait]
impl EmailSender for SmtpBackend {
    async fn send(&self, email: Email) -> Result<String, EmailError> {
        let message_id = message_id_for(email.from.as_deref().unwrap_or_default());
        let message = Self::build_message(&email, message_id.clone())?;
        let transport = self.create_transport()?;

        let response = transport
            .send(message)
            .await
            .map_err(|e| EmailError::smtp(e.to_string()))?;

        tracing::debug!(
            message_id = %message_id,
            code = %response.code(),
            host = %self.config.host,
            "SMTP relay accepted message"
        );

        Ok(message_id)
    }
}
