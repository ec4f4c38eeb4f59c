//! Center visit form

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::fields::string_or_number;
use super::validation::{validate_email, validate_phone};
use super::Submission;

/// Request to tour the center
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct VisitRequest {
    /// Visitor's name
    #[validate(length(min = 1, code = "required"))]
    pub parent_name: String,

    /// Visitor's email, receives the confirmation
    #[validate(
        length(min = 1, code = "required"),
        custom(function = "validate_email")
    )]
    pub email: String,

    /// Contact phone number
    #[validate(
        length(min = 1, code = "required"),
        custom(function = "validate_phone")
    )]
    pub phone: String,

    /// Visit date as `YYYY-MM-DD`
    #[validate(length(min = 1, code = "required"))]
    pub date: String,

    /// One of [`VISIT_TIME_SLOTS`](super::options::VISIT_TIME_SLOTS)
    #[validate(length(min = 1, code = "required"))]
    pub time_slot: String,

    /// Number of children, optional
    #[serde(deserialize_with = "string_or_number")]
    pub children_count: String,

    /// Area or city, optional
    pub area: String,

    /// Questions or requests, optional
    pub message: String,
}

impl Submission for VisitRequest {
    const REQUIRED_MESSAGE: &'static str = "All required fields must be filled";
    const EMAIL_MESSAGE: &'static str = "Invalid email format";
    const PHONE_MESSAGE: &'static str = "Invalid phone number format";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_time_slot() {
        let form = VisitRequest {
            parent_name: "Omar".to_string(),
            email: "omar@example.com".to_string(),
            phone: "0510532513".to_string(),
            date: "2025-06-10".to_string(),
            ..VisitRequest::default()
        };

        let err = form.check().unwrap_err();
        assert_eq!(err.to_string(), "Bad request: All required fields must be filled");
    }

    #[test]
    fn test_children_count_accepts_string() {
        let form: VisitRequest = serde_json::from_str(
            r#"{"parentName":"Omar","email":"omar@example.com","phone":"0510532513","date":"2025-06-10","timeSlot":"Morning (9am - 12pm)","childrenCount":"2"}"#,
        )
        .unwrap();

        assert_eq!(form.children_count, "2");
        assert!(form.check().is_ok());
    }

    #[test]
    fn test_children_count_accepts_number() {
        let form: VisitRequest = serde_json::from_str(
            r#"{"parentName":"Omar","email":"omar@example.com","phone":"0510532513","date":"2025-06-10","timeSlot":"Morning (9am - 12pm)","childrenCount":2}"#,
        )
        .unwrap();

        assert_eq!(form.children_count, "2");
        assert!(form.check().is_ok());
    }
}
