//! Field rules and date parsing shared by entities and request bodies.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{de, Deserialize, Deserializer};
use validator::ValidationError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Person names: letters separated by single inner spaces.
pub fn validate_letters(value: &str) -> Result<(), ValidationError> {
    let well_formed = !value.is_empty()
        && value == value.trim()
        && !value.contains("  ")
        && value.chars().all(|c| c.is_alphabetic() || c == ' ');

    if well_formed {
        Ok(())
    } else {
        let mut err = ValidationError::new("letters");
        err.message = Some("names must contain only letters".into());
        Err(err)
    }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

/// Rejects instants strictly after `now`.
pub fn ensure_not_in_future(value: &NaiveDateTime, now: NaiveDateTime) -> Result<(), ValidationError> {
    if *value > now {
        let mut err = ValidationError::new("future_date");
        err.message = Some("order_date cannot be in the future".into());
        Err(err)
    } else {
        Ok(())
    }
}

pub fn validate_not_in_future(value: &NaiveDateTime) -> Result<(), ValidationError> {
    ensure_not_in_future(value, Utc::now().naive_utc())
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .or_else(|| parse_datetime(raw).map(|dt| dt.date()))
}

/// Accepts RFC 3339 (normalized to UTC), the common naive layouts, or a bare date at midnight.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

pub fn flexible_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {raw}")))
}

pub fn flexible_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_datetime(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}")))
}

pub fn flexible_date_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_date(&raw)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid date: {raw}"))),
        None => Ok(None),
    }
}

pub fn flexible_datetime_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_datetime(&raw)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}"))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("Juan")]
    #[case("Maria Jose")]
    #[case("Nuñez")]
    fn accepts_letter_names(#[case] name: &str) {
        assert!(validate_letters(name).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("Juan2")]
    #[case(" Juan")]
    #[case("Juan  Perez")]
    #[case("O'Brien")]
    fn rejects_malformed_names(#[case] name: &str) {
        assert!(validate_letters(name).is_err());
    }

    #[test]
    fn blank_strings_are_rejected() {
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("W-01").is_ok());
    }

    #[test]
    fn future_instants_are_rejected() {
        let now = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert!(ensure_not_in_future(&now, now).is_ok());
        assert!(ensure_not_in_future(&(now - Duration::days(3)), now).is_ok());

        let err = ensure_not_in_future(&(now + Duration::seconds(1)), now).unwrap_err();
        assert_eq!(
            err.message.as_deref(),
            Some("order_date cannot be in the future")
        );
    }

    #[rstest]
    #[case("2024-03-05T10:20:30Z", "2024-03-05 10:20:30")]
    #[case("2024-03-05T12:20:30+02:00", "2024-03-05 10:20:30")]
    #[case("2024-03-05 10:20:30", "2024-03-05 10:20:30")]
    #[case("2024-03-05T10:20:30", "2024-03-05 10:20:30")]
    #[case("2024-03-05", "2024-03-05 00:00:00")]
    fn parses_timestamp_layouts(#[case] raw: &str, #[case] expected: &str) {
        let expected = NaiveDateTime::parse_from_str(expected, "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(parse_datetime(raw), Some(expected));
    }

    #[test]
    fn rejects_garbage_dates() {
        assert_eq!(parse_date("05/03/2024"), None);
        assert_eq!(parse_datetime("yesterday"), None);
    }

    proptest! {
        #[test]
        fn rendered_dates_parse_back(days in 0i64..40_000) {
            let date = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + Duration::days(days);
            prop_assert_eq!(parse_date(&date.to_string()), Some(date));
        }

        #[test]
        fn names_with_digits_never_validate(prefix in "[A-Za-z]{1,8}", digit in 0u8..10) {
            let name = format!("{prefix}{digit}");
            prop_assert!(validate_letters(&name).is_err());
        }
    }
}
