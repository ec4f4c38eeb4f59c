//! Neurodevelopmental pre-booking form

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::fields::{one_or_many, string_or_number};
use super::options::OTHER_CONCERN;
use super::validation::{validate_email, validate_phone};
use super::Submission;

/// Pre-booking request for an assessment or consultation
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingRequest {
    /// Child's full name
    #[validate(length(min = 1, code = "required"))]
    pub child_full_name: String,

    /// Child's age in years
    #[serde(deserialize_with = "string_or_number")]
    #[validate(length(min = 1, code = "required"))]
    pub age: String,

    /// Child's gender
    #[validate(length(min = 1, code = "required"))]
    pub gender: String,

    /// Child's nationality
    #[validate(length(min = 1, code = "required"))]
    pub nationality: String,

    /// Languages spoken at home
    #[validate(length(min = 1, code = "required"))]
    pub languages_home: String,

    /// Languages the child knows
    #[validate(length(min = 1, code = "required"))]
    pub languages_known: String,

    /// Selected concerns, at least one
    #[serde(deserialize_with = "one_or_many")]
    #[validate(length(min = 1, code = "required"))]
    pub primary_concerns: Vec<String>,

    /// Free text shown when "Other" is selected
    pub other_concern: String,

    /// Parent or guardian name
    #[validate(length(min = 1, code = "required"))]
    pub parent_name: String,

    /// Relation to the child
    #[validate(length(min = 1, code = "required"))]
    pub relation: String,

    /// Contact phone number
    #[validate(
        length(min = 1, code = "required"),
        custom(function = "validate_phone")
    )]
    pub contact_number: String,

    /// Parent email, receives the confirmation
    #[validate(
        length(min = 1, code = "required"),
        custom(function = "validate_email")
    )]
    pub email: String,

    /// In-person or online
    #[validate(length(min = 1, code = "required"))]
    pub preferred_mode: String,

    /// Preferred weekdays, at least one
    #[serde(deserialize_with = "one_or_many")]
    #[validate(length(min = 1, code = "required"))]
    pub preferred_days: Vec<String>,

    /// Morning, afternoon or evening
    #[validate(length(min = 1, code = "required"))]
    pub preferred_time_slot: String,

    /// Any previous diagnosis
    #[validate(length(min = 1, code = "required"))]
    pub previous_diagnosis: String,

    /// Any current therapy
    #[validate(length(min = 1, code = "required"))]
    pub current_therapy: String,
}

impl BookingRequest {
    /// The "other concern" text, when "Other" is ticked and text was given
    #[must_use]
    pub fn other_concern_text(&self) -> Option<&str> {
        let selected = self.primary_concerns.iter().any(|c| c == OTHER_CONCERN);
        (selected && !self.other_concern.is_empty()).then_some(self.other_concern.as_str())
    }
}

impl Submission for BookingRequest {
    const REQUIRED_MESSAGE: &'static str = "All required fields must be filled";
    const EMAIL_MESSAGE: &'static str = "Invalid email format";
    const PHONE_MESSAGE: &'static str = "Invalid phone number format";
}
