//! Notification emails for each form
//!
//! Every notification is an askama template over the submitted form. The
//! templates escape all user input; multi-line fields keep their line
//! breaks through `white-space: pre-wrap`.
//!
//! # Example
//!
//! ```rust
//! use wonderminds_site::forms::ContactMessage;
//! use wonderminds_site::notifications::{ContactNotification, Notification};
//!
//! let form = ContactMessage {
//!     name: "Jane".to_string(),
//!     email: "jane@example.com".to_string(),
//!     message: "Hello".to_string(),
//!     ..ContactMessage::default()
//! };
//!
//! let email = ContactNotification::new(&form)
//!     .compose("WonderMinds Website <website@wonderminds.edu>", "info@wonderminds.edu")
//!     .unwrap();
//!
//! assert_eq!(email.subject.as_deref(), Some("New Contact Form Submission from Jane"));
//! assert_eq!(email.reply_to.as_deref(), Some("jane@example.com"));
//! ```

pub mod format;

use askama::Template;

use crate::content::CONTACT;
use crate::email::{Email, EmailError, EmailTemplate, SimpleEmailTemplate};
use crate::forms::{AppointmentRequest, BookingRequest, ContactMessage, VisitRequest};

/// Header naming the form an email came from
pub const FORM_SOURCE_HEADER: &str = "X-Form-Source";

/// A rendered email tied to one form
pub trait Notification: EmailTemplate {
    /// Value of the [`FORM_SOURCE_HEADER`]
    const SOURCE: &'static str;

    /// Subject line
    fn subject(&self) -> String;

    /// Address replies should go to
    fn reply_to(&self) -> Option<&str> {
        None
    }

    /// Render the notification into a ready-to-send email
    ///
    /// # Errors
    ///
    /// Returns `EmailError::TemplateError` if rendering fails
    fn compose(&self, from: &str, to: &str) -> Result<Email, EmailError>
    where
        Self: Sized,
    {
        let mut email = Email::from_template(self)?
            .from(from)
            .to(to)
            .subject(&self.subject())
            .header(FORM_SOURCE_HEADER, Self::SOURCE);

        if let Some(reply_to) = self.reply_to() {
            email = email.reply_to(reply_to);
        }

        Ok(email)
    }
}

/// Contact form message for the center's inbox
#[derive(Template)]
#[template(path = "emails/contact.html")]
pub struct ContactNotification<'a> {
    form: &'a ContactMessage,
}

impl<'a> ContactNotification<'a> {
    /// Wrap a validated contact message
    #[must_use]
    pub const fn new(form: &'a ContactMessage) -> Self {
        Self { form }
    }
}

impl SimpleEmailTemplate for ContactNotification<'_> {}

impl Notification for ContactNotification<'_> {
    const SOURCE: &'static str = "contact";

    fn subject(&self) -> String {
        format!("New Contact Form Submission from {}", self.form.name)
    }

    fn reply_to(&self) -> Option<&str> {
        Some(&self.form.email)
    }
}

/// Appointment request for the center's inbox
#[derive(Template)]
#[template(path = "emails/appointment.html")]
pub struct AppointmentNotification<'a> {
    form: &'a AppointmentRequest,
    preferred_date: String,
    scheduling_link: &'a str,
}

impl<'a> AppointmentNotification<'a> {
    /// Wrap a validated appointment request
    #[must_use]
    pub fn new(form: &'a AppointmentRequest, scheduling_link: &'a str) -> Self {
        let preferred_date = if form.preferred_date.is_empty() {
            String::new()
        } else {
            format::long_date(&form.preferred_date)
        };

        Self {
            form,
            preferred_date,
            scheduling_link,
        }
    }
}

impl SimpleEmailTemplate for AppointmentNotification<'_> {}

impl Notification for AppointmentNotification<'_> {
    const SOURCE: &'static str = "appointment";

    fn subject(&self) -> String {
        format!(
            "New Appointment Request: {} ({}) - {}",
            self.form.child_name, self.form.child_age, self.form.parent_name
        )
    }

    fn reply_to(&self) -> Option<&str> {
        Some(&self.form.parent_email)
    }
}

/// Pre-booking request for the admin inbox
#[derive(Template)]
#[template(path = "emails/booking_admin.html")]
pub struct BookingNotification<'a> {
    form: &'a BookingRequest,
    concerns: String,
    other_concern: &'a str,
    days: String,
    received_on: String,
}

impl<'a> BookingNotification<'a> {
    /// Wrap a validated booking request, stamped with the given receipt time
    #[must_use]
    pub fn new(form: &'a BookingRequest, received_on: String) -> Self {
        Self {
            form,
            concerns: format::bullet_list(form.primary_concerns.as_slice()),
            other_concern: form.other_concern_text().unwrap_or_default(),
            days: format::bullet_list(form.preferred_days.as_slice()),
            received_on,
        }
    }
}

impl SimpleEmailTemplate for BookingNotification<'_> {}

impl Notification for BookingNotification<'_> {
    const SOURCE: &'static str = "booking";

    fn subject(&self) -> String {
        format!("🔔 New Pre-Booking Request - {}", self.form.child_full_name)
    }

    fn reply_to(&self) -> Option<&str> {
        Some(&self.form.email)
    }
}

const BOOKING_NEXT_STEPS: &[&str] = &[
    "Our team will review your request within 24-48 hours",
    "We will contact you via phone or email with available appointment slots",
    "You will receive instructions and any required documentation",
];

/// Confirmation sent back to the parent after a pre-booking
#[derive(Template)]
#[template(path = "emails/booking_confirmation.html")]
pub struct BookingConfirmation<'a> {
    form: &'a BookingRequest,
    next_steps: &'static [&'static str],
    center_email: &'static str,
    center_phone: &'static str,
}

impl<'a> BookingConfirmation<'a> {
    /// Confirmation for a validated booking request
    #[must_use]
    pub fn new(form: &'a BookingRequest) -> Self {
        Self {
            form,
            next_steps: BOOKING_NEXT_STEPS,
            center_email: CONTACT.email,
            center_phone: CONTACT.primary_phone(),
        }
    }
}

impl SimpleEmailTemplate for BookingConfirmation<'_> {
    fn render_text(&self) -> Result<Option<String>, EmailError> {
        Ok(Some(format!(
            "Dear {},\n\nThank you for submitting a pre-booking request for {}. \
             We have received your information and our Neurodevelopmental Team will review it carefully.\n\n\
             Preferred Mode: {}\nPreferred Time: {}\nContact Number: {}\n\n\
             Next Steps:\n{}\n\nWarm regards,\nThe WonderMinds Team\n{} | {}\n",
            self.form.parent_name,
            self.form.child_full_name,
            self.form.preferred_mode,
            self.form.preferred_time_slot,
            self.form.contact_number,
            format::bullet_list(self.next_steps),
            self.center_email,
            self.center_phone,
        )))
    }
}

impl Notification for BookingConfirmation<'_> {
    const SOURCE: &'static str = "booking";

    fn subject(&self) -> String {
        "Pre-Booking Request Received - WonderMinds".to_string()
    }
}

/// Visit request for the admin inbox
#[derive(Template)]
#[template(path = "emails/visit_admin.html")]
pub struct VisitNotification<'a> {
    form: &'a VisitRequest,
    date: String,
    received_on: String,
}

impl<'a> VisitNotification<'a> {
    /// Wrap a validated visit request, stamped with the given receipt time
    #[must_use]
    pub fn new(form: &'a VisitRequest, received_on: String) -> Self {
        Self {
            form,
            date: format::long_date(&form.date),
            received_on,
        }
    }
}

impl SimpleEmailTemplate for VisitNotification<'_> {}

impl Notification for VisitNotification<'_> {
    const SOURCE: &'static str = "visit";

    fn subject(&self) -> String {
        format!("🏫 New Visit Request - {}", self.form.parent_name)
    }

    fn reply_to(&self) -> Option<&str> {
        Some(&self.form.email)
    }
}

const VISIT_NEXT_STEPS: &[&str] = &[
    "Our team will call you within 24 hours to confirm your visit",
    "We'll provide directions and parking information",
    "Feel free to ask any questions during your tour",
    "You're welcome to bring your children along",
];

/// Confirmation sent back to the visitor
#[derive(Template)]
#[template(path = "emails/visit_confirmation.html")]
pub struct VisitConfirmation<'a> {
    form: &'a VisitRequest,
    date: String,
    next_steps: &'static [&'static str],
    center_email: &'static str,
    center_phone: &'static str,
}

impl<'a> VisitConfirmation<'a> {
    /// Confirmation for a validated visit request
    #[must_use]
    pub fn new(form: &'a VisitRequest) -> Self {
        Self {
            form,
            date: format::long_date(&form.date),
            next_steps: VISIT_NEXT_STEPS,
            center_email: CONTACT.email,
            center_phone: CONTACT.primary_phone(),
        }
    }
}

impl SimpleEmailTemplate for VisitConfirmation<'_> {
    fn render_text(&self) -> Result<Option<String>, EmailError> {
        Ok(Some(format!(
            "Dear {},\n\nThank you for your interest in visiting WonderMinds! \
             We have received your visit request and our team will confirm your appointment shortly.\n\n\
             Preferred Date: {}\nPreferred Time: {}\nContact Number: {}\n\n\
             What to Expect:\n{}\n\nWe can't wait to meet you!\nThe WonderMinds Team\n{} | {}\n",
            self.form.parent_name,
            self.date,
            self.form.time_slot,
            self.form.phone,
            format::bullet_list(self.next_steps),
            self.center_email,
            self.center_phone,
        )))
    }
}

impl Notification for VisitConfirmation<'_> {
    const SOURCE: &'static str = "visit";

    fn subject(&self) -> String {
        "Visit Request Confirmation - WonderMinds".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FROM: &str = "WonderMinds Website <website@wonderminds.edu>";

    fn booking() -> BookingRequest {
        BookingRequest {
            child_full_name: "Yusuf Khan".to_string(),
            age: "4".to_string(),
            gender: "Male".to_string(),
            nationality: "Saudi".to_string(),
            languages_home: "Arabic".to_string(),
            languages_known: "Arabic, English".to_string(),
            primary_concerns: vec!["Speech/Language Delay".to_string(), "Other".to_string()],
            other_concern: "Picky eating".to_string(),
            parent_name: "Amal Khan".to_string(),
            relation: "Mother".to_string(),
            contact_number: "0508769635".to_string(),
            email: "amal@example.com".to_string(),
            preferred_mode: "Online Tele-Consultation".to_string(),
            preferred_days: vec!["Sunday".to_string(), "Monday".to_string()],
            preferred_time_slot: "Evening".to_string(),
            previous_diagnosis: "None".to_string(),
            current_therapy: "None".to_string(),
        }
    }

    fn visit() -> VisitRequest {
        VisitRequest {
            parent_name: "Omar".to_string(),
            email: "omar@example.com".to_string(),
            phone: "0510532513".to_string(),
            date: "2025-06-10".to_string(),
            time_slot: "Morning (9am - 12pm)".to_string(),
            ..VisitRequest::default()
        }
    }

    fn html(email: &Email) -> &str {
        email.html.as_deref().unwrap()
    }

    #[test]
    fn test_contact_phone_fallback() {
        let form = ContactMessage {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            message: "Line one\nLine two".to_string(),
            ..ContactMessage::default()
        };

        let email = ContactNotification::new(&form).compose(FROM, "info@wonderminds.edu").unwrap();

        assert!(html(&email).contains("Not provided"));
        assert!(html(&email).contains("Line one\nLine two"));
        assert_eq!(email.headers[FORM_SOURCE_HEADER], "contact");
    }

    #[test]
    fn test_contact_escapes_markup() {
        let form = ContactMessage {
            name: "<b>Jane</b>".to_string(),
            email: "jane@example.com".to_string(),
            message: "<script>alert('x')</script>".to_string(),
            ..ContactMessage::default()
        };

        let email = ContactNotification::new(&form).compose(FROM, "info@wonderminds.edu").unwrap();

        assert!(!html(&email).contains("<script>"));
        assert!(html(&email).contains("&lt;script&gt;"));
        assert!(!html(&email).contains("<b>Jane</b>"));
        assert_eq!(email.subject.as_deref(), Some("New Contact Form Submission from <b>Jane</b>"));
    }

    #[test]
    fn test_appointment_optional_sections() {
        let form = AppointmentRequest {
            parent_name: "Sara".to_string(),
            parent_email: "sara@example.com".to_string(),
            phone: "0510532513".to_string(),
            child_name: "Layla".to_string(),
            child_age: "3-4 years".to_string(),
            area: "Al Khobar".to_string(),
            preferred_date: "2025-06-10".to_string(),
            ..AppointmentRequest::default()
        };

        let notification = AppointmentNotification::new(&form, "https://calendly.com/wonderminds");
        let email = notification.compose(FROM, "info@wonderminds.edu").unwrap();

        assert_eq!(
            email.subject.as_deref(),
            Some("New Appointment Request: Layla (3-4 years) - Sara")
        );
        assert_eq!(email.reply_to.as_deref(), Some("sara@example.com"));
        assert!(html(&email).contains("Tuesday, June 10, 2025"));
        assert!(html(&email).contains("calendly.com"));
        assert!(!html(&email).contains("Address:"));
        assert!(!html(&email).contains("Additional Notes"));
    }

    #[test]
    fn test_booking_lists_concerns_and_days() {
        let form = booking();
        let notification = BookingNotification::new(&form, "Tuesday, June 10, 2025 at 3:04 PM".to_string());
        let email = notification.compose(FROM, "admin@wonderminds.edu").unwrap();

        assert_eq!(email.subject.as_deref(), Some("🔔 New Pre-Booking Request - Yusuf Khan"));
        assert!(html(&email).contains("• Other\nOther Concern: Picky eating"));
        assert!(html(&email).contains("• Sunday\n• Monday"));
        assert!(html(&email).contains("Received on Tuesday, June 10, 2025 at 3:04 PM"));
    }

    #[test]
    fn test_booking_confirmation_goes_to_parent() {
        let form = booking();
        let email = BookingConfirmation::new(&form).compose(FROM, &form.email).unwrap();

        assert_eq!(email.to, vec!["amal@example.com"]);
        assert_eq!(email.subject.as_deref(), Some("Pre-Booking Request Received - WonderMinds"));
        assert!(email.reply_to.is_none());
        assert!(email.text.unwrap().contains("Online Tele-Consultation"));
    }

    #[test]
    fn test_visit_hides_missing_optional_fields() {
        let form = visit();
        let email = VisitNotification::new(&form, "now".to_string())
            .compose(FROM, "admin@wonderminds.edu")
            .unwrap();

        assert_eq!(email.subject.as_deref(), Some("🏫 New Visit Request - Omar"));
        assert!(html(&email).contains("Tuesday, June 10, 2025"));
        assert!(!html(&email).contains("Number of Children"));
        assert!(!html(&email).contains("Area/City"));
        assert!(!html(&email).contains("Additional Information"));
    }

    #[test]
    fn test_visit_confirmation() {
        let form = visit();
        let email = VisitConfirmation::new(&form).compose(FROM, &form.email).unwrap();

        assert_eq!(email.subject.as_deref(), Some("Visit Request Confirmation - WonderMinds"));
        assert!(html(&email).contains("Morning (9am - 12pm)"));
        assert!(html(&email).contains(CONTACT.email));
    }
}
