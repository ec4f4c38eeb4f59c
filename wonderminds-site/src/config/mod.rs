//! Configuration management for the WonderMinds site
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `WONDERMINDS_` prefix, `__` for nesting)
//! 2. `./config.toml` (development)
//! 3. `~/.config/wonderminds/config.toml` (user config, XDG)
//! 4. `/etc/wonderminds/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! Environment variable format: `WONDERMINDS_SECTION__FIELD_NAME`
//! - Use `__` (double underscore) to separate nested sections
//! - Use `_` (single underscore) within field names
//! - Example: `WONDERMINDS_MAIL__HOST=smtp.gmail.com`
//!
//! # Example Configuration
//!
//! ```toml
//! # config.toml
//! [server]
//! host = "0.0.0.0"
//! port = 3000
//! environment = "production"
//!
//! [mail]
//! backend = "smtp"
//! host = "smtp.gmail.com"
//! port = 587
//! username = "website@wonderminds.edu"
//! password = "app-password"
//! receiver = "info@wonderminds.edu"
//! admin = "bookings@wonderminds.edu"
//!
//! [booking]
//! scheduling_link = "https://calendly.com/wonderminds/consultation"
//!
//! [storage]
//! appointments_enabled = true
//! appointments_path = "data/appointments.json"
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const ENV_PREFIX: &str = "WONDERMINDS_";

/// Deployment environment
///
/// Controls whether internal error details are echoed back to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development, transport errors are included in responses
    Development,
    /// Production, clients only ever see generic messages
    Production,
}

impl Default for Environment {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }
}

impl Environment {
    /// Returns true for [`Environment::Development`]
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind
    pub host: String,

    /// Port to bind
    pub port: u16,

    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            environment: Environment::default(),
        }
    }
}

impl ServerSettings {
    /// Socket address string suitable for `TcpListener::bind`
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which outbound mail backend to construct at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailBackendKind {
    /// Deliver through an SMTP relay
    Smtp,
    /// Log messages instead of delivering them
    Console,
}

/// Outbound mail configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MailSettings {
    /// Backend used to deliver mail
    pub backend: MailBackendKind,

    /// SMTP server hostname
    pub host: String,

    /// SMTP server port (587 for STARTTLS, 465 for implicit TLS)
    pub port: u16,

    /// SMTP username, also the default sender address
    pub username: Option<String>,

    /// SMTP password
    pub password: Option<String>,

    /// Sender address when it differs from the SMTP username
    pub from_address: Option<String>,

    /// Display name on outgoing mail
    pub from_name: String,

    /// Inbox for contact and appointment notifications
    pub receiver: Option<String>,

    /// Inbox for pre-booking and visit notifications
    pub admin: Option<String>,
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            backend: MailBackendKind::Smtp,
            host: "smtp.gmail.com".to_string(),
            port: 587,
            username: None,
            password: None,
            from_address: None,
            from_name: "WonderMinds Website".to_string(),
            receiver: None,
            admin: None,
        }
    }
}

impl MailSettings {
    /// Whether enough is configured to attempt delivery
    ///
    /// The console backend never needs credentials. SMTP needs a host,
    /// a username and a password.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        match self.backend {
            MailBackendKind::Console => true,
            MailBackendKind::Smtp => {
                !self.host.trim().is_empty()
                    && non_empty(self.username.as_deref()).is_some()
                    && non_empty(self.password.as_deref()).is_some()
            }
        }
    }

    /// Bare sender address
    #[must_use]
    pub fn sender_address(&self) -> &str {
        non_empty(self.from_address.as_deref())
            .or_else(|| non_empty(self.username.as_deref()))
            .unwrap_or("noreply@wonderminds.edu")
    }

    /// `From` header value, `Display Name <address>`
    #[must_use]
    pub fn sender(&self) -> String {
        format!("{} <{}>", self.from_name, self.sender_address())
    }

    /// Recipient of contact and appointment notifications
    #[must_use]
    pub fn receiver_address(&self) -> &str {
        non_empty(self.receiver.as_deref())
            .or_else(|| non_empty(self.admin.as_deref()))
            .unwrap_or_else(|| self.sender_address())
    }

    /// Recipient of pre-booking and visit notifications
    #[must_use]
    pub fn admin_address(&self) -> &str {
        non_empty(self.admin.as_deref())
            .or_else(|| non_empty(self.receiver.as_deref()))
            .unwrap_or_else(|| self.sender_address())
    }
}

/// `Some` only for values with non-whitespace content
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Appointment follow-up settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingSettings {
    /// Scheduling link returned to clients after an appointment request
    pub scheduling_link: String,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            scheduling_link: "https://calendly.com/wonderminds/consultation".to_string(),
        }
    }
}

/// Local persistence settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Keep a local JSON log of appointment requests
    pub appointments_enabled: bool,

    /// Location of the appointment log
    pub appointments_path: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            appointments_enabled: true,
            appointments_path: PathBuf::from("data/appointments.json"),
        }
    }
}

/// Complete site configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Outbound mail settings
    #[serde(default)]
    pub mail: MailSettings,

    /// Appointment follow-up settings
    #[serde(default)]
    pub booking: BookingSettings,

    /// Local persistence settings
    #[serde(default)]
    pub storage: StorageSettings,
}

impl SiteConfig {
    /// Load configuration from the standard locations
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file cannot be read or parsed
    /// - A value has the wrong type (e.g. a non-numeric port)
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use wonderminds_site::config::SiteConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = SiteConfig::load()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> anyhow::Result<Self> {
        let mut figment = Self::defaults()?;

        let system_config = PathBuf::from("/etc/wonderminds/config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from("./config.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        let config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true))
            .extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file, with environment overrides
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML or badly typed values.
    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        let config = Self::defaults()?
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true))
            .extract()?;

        Ok(config)
    }

    /// XDG user config location: `~/.config/wonderminds/config.toml`
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| config_dir.join("wonderminds").join("config.toml"),
        )
    }

    fn defaults() -> anyhow::Result<Figment> {
        Ok(Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?)))
    }
}
