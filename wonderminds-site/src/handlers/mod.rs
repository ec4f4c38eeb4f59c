//! Form submission endpoints
//!
//! Every endpoint follows the same sequence: refuse early when mail is not
//! configured, parse and validate the JSON body, render the notification,
//! send it, and answer with a JSON envelope.
//!
//! | Path | Form | Emails |
//! |------|------|--------|
//! | `POST /api/send-email` | contact | center inbox |
//! | `POST /api/send-appointment` | appointment | center inbox |
//! | `POST /api/send-booking` | pre-booking | admin, then parent |
//! | `POST /api/send-visit` | visit | admin, then visitor |
//!
//! Any other method on these paths answers 405.

mod appointment;
mod booking;
mod contact;
mod visit;

pub use appointment::send_appointment;
pub use booking::send_booking;
pub use contact::send_email;
pub use visit::send_visit;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::{debug, error};

use crate::email::{Email, EmailError};
use crate::error::SiteError;
use crate::forms::Submission;
use crate::state::AppState;

/// Message for bodies that are not a JSON object of the expected shape
pub const INVALID_BODY: &str = "Invalid request body";

/// Routes for the four form endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/send-email",
            post(send_email).fallback(method_not_allowed),
        )
        .route(
            "/api/send-appointment",
            post(send_appointment).fallback(method_not_allowed),
        )
        .route(
            "/api/send-booking",
            post(send_booking).fallback(method_not_allowed),
        )
        .route(
            "/api/send-visit",
            post(send_visit).fallback(method_not_allowed),
        )
}

/// 405 for any method other than `POST`
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
        .into_response()
}

/// Refuse to work when mail credentials are missing
fn require_mail(state: &AppState) -> Result<(), SiteError> {
    if state.config().mail.is_configured() {
        Ok(())
    } else {
        error!("Mail settings incomplete, refusing form submission");
        Err(SiteError::MailNotConfigured)
    }
}

/// Unwrap the JSON body and run the form's validation rules
fn accept<T: Submission>(payload: Result<Json<T>, JsonRejection>) -> Result<T, SiteError> {
    let Json(form) = payload.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "Rejected request body");
        SiteError::bad_request(INVALID_BODY)
    })?;

    form.check()?;
    Ok(form)
}

/// Send a composed email, mapping any failure to the flow's generic message
async fn deliver(
    state: &AppState,
    email: Result<Email, EmailError>,
    failure: &'static str,
) -> Result<String, SiteError> {
    let email = email.map_err(|e| delivery_error(state, failure, &e))?;

    state
        .mailer()
        .send(email)
        .await
        .map_err(|e| delivery_error(state, failure, &e))
}

fn delivery_error(state: &AppState, failure: &'static str, err: &EmailError) -> SiteError {
    error!(error = %err, "{failure}");

    let detail = state
        .config()
        .server
        .environment
        .is_development()
        .then(|| err.to_string());

    SiteError::delivery(failure, detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Environment, MailBackendKind, SiteConfig};
    use crate::email::MockEmailSender;
    use crate::forms::ContactMessage;
    use crate::storage::AppointmentLog;
    use std::sync::Arc;

    fn state(environment: Environment, mailer: MockEmailSender) -> AppState {
        let mut config = SiteConfig::default();
        config.mail.backend = MailBackendKind::Console;
        config.server.environment = environment;
        AppState::new(config, Arc::new(mailer), AppointmentLog::disabled())
    }

    fn email() -> Email {
        Email::new()
            .to("info@wonderminds.edu")
            .from("website@wonderminds.edu")
            .subject("Test")
            .text("Hello")
    }

    #[tokio::test]
    async fn test_deliver_returns_message_id() {
        let mut mailer = MockEmailSender::new();
        mailer
            .expect_send()
            .times(1)
            .returning(|_| Ok("<id@wonderminds.edu>".to_string()));

        let state = state(Environment::Production, mailer);
        let id = deliver(&state, Ok(email()), "Failed").await.unwrap();

        assert_eq!(id, "<id@wonderminds.edu>");
    }

    #[tokio::test]
    async fn test_delivery_detail_only_in_development() {
        let mut mailer = MockEmailSender::new();
        mailer
            .expect_send()
            .returning(|_| Err(EmailError::smtp("535 authentication failed")));
        let dev = state(Environment::Development, mailer);

        let err = deliver(&dev, Ok(email()), "Failed to send email").await.unwrap_err();
        assert!(matches!(
            err,
            SiteError::Delivery { detail: Some(ref d), .. } if d.contains("535")
        ));

        let mut mailer = MockEmailSender::new();
        mailer
            .expect_send()
            .returning(|_| Err(EmailError::smtp("535 authentication failed")));
        let prod = state(Environment::Production, mailer);

        let err = deliver(&prod, Ok(email()), "Failed to send email").await.unwrap_err();
        assert!(matches!(err, SiteError::Delivery { detail: None, .. }));
    }

    #[tokio::test]
    async fn test_render_failure_skips_send() {
        let mut mailer = MockEmailSender::new();
        mailer.expect_send().never();
        let state = state(Environment::Production, mailer);

        let err = deliver(&state, Err(EmailError::NoContent), "Failed").await.unwrap_err();
        assert!(matches!(err, SiteError::Delivery { .. }));
    }

    #[test]
    fn test_accept_validates() {
        let form = ContactMessage {
            name: "Jane".to_string(),
            email: "jane@example".to_string(),
            message: "Hi".to_string(),
            ..ContactMessage::default()
        };

        let err = accept(Ok(Json(form))).unwrap_err();
        assert_eq!(err.to_string(), "Bad request: Invalid email format.");
    }
}
