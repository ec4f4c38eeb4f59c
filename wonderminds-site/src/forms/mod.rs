//! Form payloads and their validation
//!
//! Each public form posts a flat JSON object. Missing keys deserialize to
//! empty values, so a single [`Submission::check`] call covers both absent
//! and blank fields. Failures are reported one rule at a time, in this
//! order: required fields, email format, phone format.
//!
//! # Example
//!
//! ```rust
//! use wonderminds_site::forms::{ContactMessage, Submission};
//!
//! let form: ContactMessage = serde_json::from_str(
//!     r#"{"name": "Jane", "email": "jane@example", "message": "Hi"}"#,
//! ).unwrap();
//!
//! let err = form.check().unwrap_err();
//! assert_eq!(err.to_string(), "Bad request: Invalid email format.");
//! ```

mod appointment;
mod booking;
mod contact;
mod fields;
pub mod options;
mod validation;
mod visit;

pub use appointment::AppointmentRequest;
pub use booking::BookingRequest;
pub use contact::ContactMessage;
pub use validation::{is_valid_email, is_valid_phone};
pub use visit::VisitRequest;

use validator::{Validate, ValidationErrors};

use crate::error::SiteError;

/// A validated form submission with per-form error messages
pub trait Submission: Validate {
    /// Message for a missing or blank required field
    const REQUIRED_MESSAGE: &'static str;

    /// Message for a malformed email address
    const EMAIL_MESSAGE: &'static str;

    /// Message for a malformed phone number
    const PHONE_MESSAGE: &'static str;

    /// Run the validation rules
    ///
    /// # Errors
    ///
    /// Returns `SiteError::BadRequest` carrying the message of the first
    /// failing rule
    fn check(&self) -> Result<(), SiteError> {
        self.validate()
            .map_err(|errors| SiteError::bad_request(Self::first_failure(&errors)))
    }

    /// Pick the message for the highest priority failure
    fn first_failure(errors: &ValidationErrors) -> &'static str {
        let failed = |code: &str| {
            errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .any(|e| e.code == code)
        };

        if failed(validation::REQUIRED) {
            Self::REQUIRED_MESSAGE
        } else if failed(validation::EMAIL) {
            Self::EMAIL_MESSAGE
        } else if failed(validation::PHONE) {
            Self::PHONE_MESSAGE
        } else {
            Self::REQUIRED_MESSAGE
        }
    }
}
