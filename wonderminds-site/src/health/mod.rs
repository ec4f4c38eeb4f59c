//! Health check endpoint
//!
//! ```rust,no_run
//! use axum::{routing::get, Router};
//! use wonderminds_site::{health::health_check, state::AppState};
//!
//! let app: Router<AppState> = Router::new().route("/health", get(health_check));
//! ```

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::state::AppState;

/// Overall service status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Serving requests
    Healthy,
}

/// Whether the form endpoints can send mail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailStatus {
    /// Credentials present
    Configured,
    /// Form submissions will be refused
    Unconfigured,
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// Overall status
    pub status: HealthStatus,
    /// Crate version
    pub version: String,
    /// Mail readiness
    pub mail: MailStatus,
}

impl HealthReport {
    /// Report for the given configuration
    #[must_use]
    pub fn for_config(config: &SiteConfig) -> Self {
        let mail = if config.mail.is_configured() {
            MailStatus::Configured
        } else {
            MailStatus::Unconfigured
        };

        Self {
            status: HealthStatus::Healthy,
            version: env!("CARGO_PKG_VERSION").to_string(),
            mail,
        }
    }
}

impl IntoResponse for HealthReport {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// `GET /health`
#[allow(clippy::unused_async)]
pub async fn health_check(State(state): State<AppState>) -> HealthReport {
    HealthReport::for_config(state.config())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MailBackendKind;

    #[test]
    fn test_default_smtp_config_is_unconfigured() {
        let report = HealthReport::for_config(&SiteConfig::default());

        assert_eq!(report.status, HealthStatus::Healthy);
        assert_eq!(report.mail, MailStatus::Unconfigured);
        assert_eq!(report.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_serializes_lowercase() {
        let mut config = SiteConfig::default();
        config.mail.backend = MailBackendKind::Console;

        let json = serde_json::to_value(HealthReport::for_config(&config)).unwrap();

        assert_eq!(json["status"], "healthy");
        assert_eq!(json["mail"], "configured");
    }
}
