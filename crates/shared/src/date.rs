use time::{Date, OffsetDateTime, macros::format_description};

/// Current calendar date (UTC).
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Parse an ISO-8601 date or date-time, keeping only the date part.
///
/// `2025-01-02`, `2025-01-02T10:30:00Z` and `2025-01-02T10:30:00.000+02:00`
/// all yield 2025-01-02. Anything else returns `None`.
pub fn parse_date(value: &str) -> Option<Date> {
    let head = value.trim().get(..10)?;

    Date::parse(head, format_description!("[year]-[month]-[day]")).ok()
}

/// Serde adapter storing a [`Date`] as `YYYY-MM-DD`.
pub mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use time::Date;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(date)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;

        super::parse_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date `{raw}`")))
    }
}
