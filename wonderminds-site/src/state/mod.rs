//! Application state shared by every handler

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::{MailBackendKind, SiteConfig};
use crate::email::{ConsoleBackend, EmailSender, SmtpBackend};
use crate::storage::AppointmentLog;

/// Application state for the WonderMinds site
///
/// Holds the configuration, the injected mail sender and the appointment
/// log handle. Cloning is cheap.
///
/// # Example
///
/// ```rust,no_run
/// use wonderminds_site::{config::SiteConfig, state::AppState};
///
/// # async fn example() -> anyhow::Result<()> {
/// let state = AppState::from_config(SiteConfig::load()?);
///
/// let app = wonderminds_site::build_router(state);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AppState {
    config: Arc<SiteConfig>,
    mailer: Arc<dyn EmailSender>,
    appointments: AppointmentLog,
}

impl AppState {
    /// Assemble state from already-built parts
    #[must_use]
    pub fn new(config: SiteConfig, mailer: Arc<dyn EmailSender>, appointments: AppointmentLog) -> Self {
        Self {
            config: Arc::new(config),
            mailer,
            appointments,
        }
    }

    /// Build the mail backend and appointment log described by `config`
    ///
    /// An SMTP backend without credentials is still constructed; the form
    /// handlers refuse to send until the configuration is complete. Must be
    /// called from within a Tokio runtime when the appointment log is enabled.
    #[must_use]
    pub fn from_config(config: SiteConfig) -> Self {
        let mailer: Arc<dyn EmailSender> = match config.mail.backend {
            MailBackendKind::Console => {
                info!("Mail backend: console");
                Arc::new(ConsoleBackend::verbose())
            }
            MailBackendKind::Smtp => match SmtpBackend::from_settings(&config.mail) {
                Ok(backend) => {
                    info!(host = %config.mail.host, port = config.mail.port, "Mail backend: SMTP");
                    Arc::new(backend)
                }
                Err(e) => {
                    warn!(error = %e, "SMTP settings incomplete, form submissions will be refused");
                    Arc::new(ConsoleBackend::new())
                }
            },
        };

        let appointments = if config.storage.appointments_enabled {
            AppointmentLog::spawn(config.storage.appointments_path.clone())
        } else {
            AppointmentLog::disabled()
        };

        Self::new(config, mailer, appointments)
    }

    /// Get the site configuration
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Get the mail sender
    #[must_use]
    pub fn mailer(&self) -> &dyn EmailSender {
        self.mailer.as_ref()
    }

    /// Get the appointment log
    #[must_use]
    pub const fn appointments(&self) -> &AppointmentLog {
        &self.appointments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageSettings;

    fn console_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.mail.backend = MailBackendKind::Console;
        config.storage = StorageSettings {
            appointments_enabled: false,
            ..StorageSettings::default()
        };
        config
    }

    #[tokio::test]
    async fn test_from_config_console() {
        let state = AppState::from_config(console_config());

        assert!(state.config().mail.is_configured());
        assert!(!state.appointments().is_enabled());
    }

    #[tokio::test]
    async fn test_from_config_unconfigured_smtp() {
        let mut config = console_config();
        config.mail.backend = MailBackendKind::Smtp;

        let state = AppState::from_config(config);
        assert!(!state.config().mail.is_configured());
    }
}
