//! Structured logging
//!
//! `RUST_LOG` overrides the default filter. Development gets human-readable
//! output, production gets one JSON object per line.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Environment;

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, coloured
    Pretty,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Format suited to `environment`
    #[must_use]
    pub const fn for_environment(environment: Environment) -> Self {
        if environment.is_development() {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

/// Filter used when `RUST_LOG` is unset
#[must_use]
pub const fn default_directives(environment: Environment) -> &'static str {
    if environment.is_development() {
        "info,wonderminds_site=debug,tower_http=debug"
    } else {
        "info,tower_http=info"
    }
}

/// Install the global subscriber
///
/// ```rust,no_run
/// use wonderminds_site::{config::Environment, observability};
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init(Environment::Development)?;
/// tracing::info!("Application started");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(environment: Environment) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(environment)));

    let registry = tracing_subscriber::registry().with(env_filter);

    match LogFormat::for_environment(environment) {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()?,
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?,
    }

    Ok(())
}
