//! Text formatting for notification bodies

use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Render a `YYYY-MM-DD` date as "Tuesday, June 10, 2025"
///
/// Anything that does not parse is returned unchanged.
#[must_use]
pub fn long_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_or_else(
        |_| raw.to_string(),
        |date| date.format("%A, %B %-d, %Y").to_string(),
    )
}

/// Render a timestamp as "Tuesday, June 10, 2025 at 3:04 PM"
#[must_use]
pub fn timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%A, %B %-d, %Y at %-I:%M %p").to_string()
}

/// The "received on" stamp in server local time
#[must_use]
pub fn received_now() -> String {
    timestamp(&Local::now())
}

/// One `• item` per line
#[must_use]
pub fn bullet_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_long_date() {
        assert_eq!(long_date("2025-06-10"), "Tuesday, June 10, 2025");
        assert_eq!(long_date("2024-02-29"), "Thursday, February 29, 2024");
    }

    #[test]
    fn test_long_date_passthrough() {
        assert_eq!(long_date("next Tuesday"), "next Tuesday");
        assert_eq!(long_date("2025-02-30"), "2025-02-30");
        assert_eq!(long_date(""), "");
    }

    #[test]
    fn test_timestamp() {
        let at = Utc.with_ymd_and_hms(2025, 6, 10, 15, 4, 0).unwrap();
        assert_eq!(timestamp(&at), "Tuesday, June 10, 2025 at 3:04 PM");

        let morning = Utc.with_ymd_and_hms(2025, 6, 10, 0, 30, 0).unwrap();
        assert_eq!(timestamp(&morning), "Tuesday, June 10, 2025 at 12:30 AM");
    }

    #[test]
    fn test_bullet_list() {
        assert_eq!(bullet_list(&["Sunday", "Monday"]), "• Sunday\n• Monday");
        assert_eq!(bullet_list::<&str>(&[]), "");
    }
}
