//! Test doubles and state builders
//!
//! - [`MockEmailSender`] records every email instead of sending it
//! - [`FailingEmailSender`] fails, optionally after a number of successes
//! - [`test_state`] assembles an [`AppState`] around either of them
//!
//! Compiled only for this crate's tests or with the `testing` feature.
//!
//! # Example
//!
//! ```rust
//! use wonderminds_site::testing::{test_state, MockEmailSender};
//!
//! let mailer = MockEmailSender::new();
//! let state = test_state(mailer.clone());
//! let app = wonderminds_site::build_router(state);
//!
//! assert_eq!(mailer.sent_count(), 0);
//! ```

mod email;

pub use email::{FailingEmailSender, MockEmailSender};

use std::sync::Arc;

use crate::config::{MailBackendKind, SiteConfig};
use crate::email::EmailSender;
use crate::state::AppState;
use crate::storage::AppointmentLog;

/// Configuration with a complete mail setup and the appointment log off
#[must_use]
pub fn test_config() -> SiteConfig {
    let mut config = SiteConfig::default();
    config.mail.backend = MailBackendKind::Console;
    config.mail.receiver = Some("info@wonderminds.edu".to_string());
    config.mail.admin = Some("admin@wonderminds.edu".to_string());
    config.storage.appointments_enabled = false;
    config
}

/// State around `mailer` using [`test_config`]
#[must_use]
pub fn test_state<M: EmailSender + 'static>(mailer: M) -> AppState {
    AppState::new(test_config(), Arc::new(mailer), AppointmentLog::disabled())
}
