//! Choices offered by the site's forms
//!
//! These feed the `<select>` and checkbox groups in the page templates.
//! Submissions are not rejected for values outside them.

/// Child age groups on the appointment form
pub const CHILD_AGE_GROUPS: &[&str] = &[
    "6 months - 1 year",
    "1-2 years",
    "2-3 years",
    "3-4 years",
    "4-5 years",
    "5-6 years",
    "6+ years",
];

/// Concern that unlocks the free-text "other concern" field
pub const OTHER_CONCERN: &str = "Other";

/// Primary concerns on the pre-booking form
pub const PRIMARY_CONCERNS: &[&str] = &[
    "Speech/Language Delay",
    "Behaviors / Meltdowns / Aggression",
    "Suspected Autism / Developmental Delay",
    "Learning / School Difficulties",
    "Attention / ADHD-like Concerns",
    "Social Interaction / Play Difficulties",
    "Sensory Issues (sound, touch, lights, etc.)",
    OTHER_CONCERN,
];

/// Days the center runs consultations
pub const CONSULTATION_DAYS: &[&str] = &["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday"];

/// Time slots on the pre-booking form
pub const BOOKING_TIME_SLOTS: &[&str] = &["Morning", "Afternoon", "Evening"];

/// Consultation modes on the pre-booking form
pub const CONSULTATION_MODES: &[&str] = &["In-Person (Center Visit)", "Online Tele-Consultation"];

/// Genders on the pre-booking form
pub const GENDERS: &[&str] = &["Male", "Female"];

/// Time slots on the visit form
pub const VISIT_TIME_SLOTS: &[&str] = &[
    "Morning (9am - 12pm)",
    "Afternoon (12pm - 3pm)",
    "Evening (3pm - 6pm)",
];
