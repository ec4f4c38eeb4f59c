//! Error types and JSON response envelopes for the form endpoints

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Message returned when mail credentials are missing
pub const MAIL_NOT_CONFIGURED: &str =
    "Email configuration is incomplete. Please check environment variables.";

/// Site error type
///
/// Every variant renders as `{"success": false, "error": ...}`.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Client input was malformed or failed validation (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Mail credentials are missing, nothing was sent (500)
    #[error("Email configuration is incomplete. Please check environment variables.")]
    MailNotConfigured,

    /// Rendering or delivery failed (500)
    ///
    /// `detail` carries the underlying error text and is only echoed to the
    /// client when it is set, which handlers do in development.
    #[error("{message}")]
    Delivery {
        /// Generic per-form message shown to the client
        message: String,
        /// Underlying error text
        detail: Option<String>,
    },
}

impl SiteError {
    /// Create a bad request error
    #[must_use]
    pub fn bad_request<T: Into<String>>(msg: T) -> Self {
        Self::BadRequest(msg.into())
    }

    /// Create a delivery error
    #[must_use]
    pub fn delivery<T: Into<String>>(message: T, detail: Option<String>) -> Self {
        Self::Delivery {
            message: message.into(),
            detail,
        }
    }

    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::MailNotConfigured | Self::Delivery { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Failure envelope
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Always `false`
    pub success: bool,
    /// Human-readable message
    pub error: String,
    /// Underlying error text, development only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

/// Success envelope
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessBody {
    /// Always `true`
    pub success: bool,
    /// Human-readable message
    pub message: String,
    /// Message-ID of the notification email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Scheduling link offered after an appointment request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendly_link: Option<String>,
}

impl SuccessBody {
    /// Success with just a message
    #[must_use]
    pub fn new<T: Into<String>>(message: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            ..Self::default()
        }
    }

    /// Attach the notification's Message-ID
    #[must_use]
    pub fn with_message_id(mut self, message_id: String) -> Self {
        self.message_id = Some(message_id);
        self
    }

    /// Attach the scheduling link
    #[must_use]
    pub fn with_calendly_link(mut self, link: String) -> Self {
        self.calendly_link = Some(link);
        self
    }
}

impl IntoResponse for SuccessBody {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error, debug) = match self {
            Self::BadRequest(message) => (message, None),
            Self::MailNotConfigured => (MAIL_NOT_CONFIGURED.to_string(), None),
            Self::Delivery { message, detail } => (message, detail),
        };

        let body = ErrorBody {
            success: false,
            error,
            debug,
        };

        (status, Json(body)).into_response()
    }
}
