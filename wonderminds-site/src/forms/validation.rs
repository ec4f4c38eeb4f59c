//! Field format rules shared by every form

use lettre::Address;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// Loose address check: something, `@`, something, `.`, something
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Digits only, optional leading `+`, 7 to 15 digits
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{7,15}$").expect("phone pattern is valid"));

/// Separators people type inside phone numbers
static PHONE_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-()]").expect("separator pattern is valid"));

/// Error code for a missing required field
pub const REQUIRED: &str = "required";
/// Error code for a malformed email address
pub const EMAIL: &str = "email";
/// Error code for a malformed phone number
pub const PHONE: &str = "phone";

/// Check an email address against the site's address pattern
///
/// The address must also be one the mail transport can put in a header,
/// since it ends up in `Reply-To` or `To`.
///
/// ```rust
/// use wonderminds_site::forms::is_valid_email;
///
/// assert!(is_valid_email("parent@example.com"));
/// assert!(!is_valid_email("parent@example"));
/// assert!(!is_valid_email("jane,doe@example.com"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email) && email.parse::<Address>().is_ok()
}

pub(crate) fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new(EMAIL))
    }
}

/// Check a phone number after stripping spaces, dashes and parentheses
///
/// ```rust
/// use wonderminds_site::forms::is_valid_phone;
///
/// assert!(is_valid_phone("+966 (51) 053-2513"));
/// assert!(!is_valid_phone("12345"));
/// ```
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = PHONE_SEPARATORS.replace_all(phone, "");
    PHONE_RE.is_match(&digits)
}

pub(crate) fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(ValidationError::new(PHONE))
    }
}

/// Phone rule for forms where the number may be left blank
pub(crate) fn validate_optional_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.is_empty() {
        Ok(())
    } else {
        validate_phone(phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("has space@example.com"));
        assert!(!is_valid_email("two@@example.com"));
    }

    #[test]
    fn test_pattern_matches_rejected_by_transport() {
        for address in [
            "jane,doe@example.com",
            "jane<doe@example.com",
            "jane(doe)@example.com",
            "jane@example.com.",
            "jane;doe@example.com",
            "\"jane@example.com",
        ] {
            assert!(EMAIL_RE.is_match(address), "{address}");
            assert!(!is_valid_email(address), "{address}");
            assert!(validate_email(address).is_err(), "{address}");
        }
    }

    #[test]
    fn test_phone_length_bounds() {
        assert!(!is_valid_phone("123456"));
        assert!(is_valid_phone("1234567"));
        assert!(is_valid_phone("123456789012345"));
        assert!(!is_valid_phone("1234567890123456"));
    }

    #[test]
    fn test_phone_separators_are_ignored() {
        assert!(is_valid_phone("+966 51 053 2513"));
        assert!(is_valid_phone("(050) 876-9635"));
        assert!(!is_valid_phone("050.876.9635"));
        assert!(!is_valid_phone("++9665108769635"));
        assert!(!is_valid_phone("05087a9635"));
    }

    #[test]
    fn test_optional_phone_allows_blank() {
        assert!(validate_optional_phone("").is_ok());
        assert!(validate_optional_phone("0508769635").is_ok());
        assert!(validate_optional_phone("abc").is_err());
    }
}
