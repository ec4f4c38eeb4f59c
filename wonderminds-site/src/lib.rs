//! wonderminds-site: website of the WonderMinds early learning center
//!
//! Server-rendered informational pages plus four JSON form endpoints that
//! validate a submission and email it to the center:
//!
//! - `POST /api/send-email`: contact form
//! - `POST /api/send-appointment`: appointment request, also appended to a
//!   JSON log
//! - `POST /api/send-booking`: pre-booking, with a confirmation to the parent
//! - `POST /api/send-visit`: visit request, with a confirmation to the visitor
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wonderminds_site::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = SiteConfig::load()?;
//!     let address = config.server.bind_address();
//!
//!     let app = build_router(AppState::from_config(config));
//!
//!     let listener = tokio::net::TcpListener::bind(address).await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod content;
pub mod email;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod health;
pub mod notifications;
pub mod observability;
pub mod pages;
pub mod state;
pub mod storage;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::state::AppState;

/// Assemble the complete application
///
/// Pages, form endpoints and `/health`, with a 404 page for everything else.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(pages::router())
        .merge(handlers::router())
        .route("/health", get(health::health_check))
        .fallback(pages::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! ```rust
    //! use wonderminds_site::prelude::*;
    //! ```

    pub use crate::build_router;

    // Configuration and state
    pub use crate::config::{Environment, MailBackendKind, SiteConfig};
    pub use crate::state::AppState;

    // Forms
    pub use crate::forms::{
        AppointmentRequest, BookingRequest, ContactMessage, Submission, VisitRequest,
    };

    // Email system
    pub use crate::email::{
        ConsoleBackend, Email, EmailError, EmailSender, EmailTemplate, SimpleEmailTemplate,
        SmtpBackend,
    };
    pub use crate::notifications::Notification;

    // Pages
    pub use crate::pages::PageTemplate;

    // Error types
    pub use crate::error::{SiteError, SuccessBody};

    // Storage
    pub use crate::storage::{AppointmentLog, AppointmentRecord, StorageError};

    // Re-export key dependencies
    pub use askama;
    pub use axum;
    pub use validator;
}
