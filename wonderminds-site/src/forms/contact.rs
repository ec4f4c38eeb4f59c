//! General contact form

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{validate_email, validate_optional_phone};
use super::Submission;

/// Message sent from the contact page
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactMessage {
    /// Sender's name
    #[validate(length(min = 1, code = "required"))]
    pub name: String,

    /// Sender's email, used as Reply-To
    #[validate(
        length(min = 1, code = "required"),
        custom(function = "validate_email")
    )]
    pub email: String,

    /// Optional phone number
    #[validate(custom(function = "validate_optional_phone"))]
    pub phone: String,

    /// Free-text message
    #[validate(length(min = 1, code = "required"))]
    pub message: String,
}

impl Submission for ContactMessage {
    const REQUIRED_MESSAGE: &'static str =
        "Missing required fields: name, email, and message are required.";
    const EMAIL_MESSAGE: &'static str = "Invalid email format.";
    const PHONE_MESSAGE: &'static str = "Invalid phone number format.";
}
