//! Consultation appointment form

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{validate_email, validate_phone};
use super::Submission;

/// Appointment request from the booking page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct AppointmentRequest {
    /// Parent or guardian name
    #[validate(length(min = 1, code = "required"))]
    pub parent_name: String,

    /// Parent email, used as Reply-To
    #[validate(
        length(min = 1, code = "required"),
        custom(function = "validate_email")
    )]
    pub parent_email: String,

    /// Contact phone number
    #[validate(
        length(min = 1, code = "required"),
        custom(function = "validate_phone")
    )]
    pub phone: String,

    /// Child's name
    #[validate(length(min = 1, code = "required"))]
    pub child_name: String,

    /// One of the age groups in [`CHILD_AGE_GROUPS`](super::options::CHILD_AGE_GROUPS)
    #[validate(length(min = 1, code = "required"))]
    pub child_age: String,

    /// Area or city
    #[validate(length(min = 1, code = "required"))]
    pub area: String,

    /// Full address, optional
    pub address: String,

    /// Preferred date as `YYYY-MM-DD`, optional
    pub preferred_date: String,

    /// Additional notes, optional
    pub notes: String,
}

impl Submission for AppointmentRequest {
    const REQUIRED_MESSAGE: &'static str = "Missing required fields: parentName, parentEmail, phone, childName, childAge, and area are required.";
    const EMAIL_MESSAGE: &'static str = "Invalid email format.";
    const PHONE_MESSAGE: &'static str =
        "Invalid phone number format. Please enter a valid phone number (7-15 digits).";
}
