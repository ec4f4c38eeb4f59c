//! Lenient field decoders for browser-encoded JSON forms

use serde::{Deserialize, Deserializer};

/// Accept a lone string where a list is expected
///
/// Browsers encoding a form as JSON send a single ticked checkbox as a
/// plain string.
pub(super) fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) if value.is_empty() => Vec::new(),
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}

/// Accept a JSON number where text is expected
///
/// `<input type="number">` values arrive as numbers from some encoders.
/// `null` reads as an empty string.
pub(super) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => String::new(),
        Some(StringOrNumber::Text(value)) => value,
        Some(StringOrNumber::Number(value)) => value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Fields {
        #[serde(deserialize_with = "super::one_or_many")]
        days: Vec<String>,
        #[serde(deserialize_with = "super::string_or_number")]
        count: String,
    }

    fn parse(json: &str) -> Fields {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_count_accepts_text_and_numbers() {
        assert_eq!(parse(r#"{"count": "3"}"#).count, "3");
        assert_eq!(parse(r#"{"count": 3}"#).count, "3");
        assert_eq!(parse(r#"{"count": 4.5}"#).count, "4.5");
        assert_eq!(parse(r#"{"count": null}"#).count, "");
        assert_eq!(parse("{}").count, "");
    }

    #[test]
    fn test_count_rejects_other_types() {
        assert!(serde_json::from_str::<Fields>(r#"{"count": true}"#).is_err());
        assert!(serde_json::from_str::<Fields>(r#"{"count": [1]}"#).is_err());
    }

    #[test]
    fn test_days_accept_one_or_many() {
        assert_eq!(parse(r#"{"days": "Sunday"}"#).days, vec!["Sunday"]);
        assert_eq!(parse(r#"{"days": ["Sunday", "Monday"]}"#).days, vec!["Sunday", "Monday"]);
        assert!(parse(r#"{"days": ""}"#).days.is_empty());
    }
}
