//! Display formatting for server timestamps
//!
//! Values are shown in the offset they were sent with. Anything that doesn't
//! parse is shown as is.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE: &str = "%-m/%-d/%Y";
const DATE_TIME: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

fn parse(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = value.replacen(' ', "T", 1).parse::<NaiveDateTime>() {
        return Some(dt);
    }
    value.parse::<NaiveDate>().ok().and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `2024-01-10` -> `1/10/2024`
pub fn date(value: &str) -> String {
    parse(value).map(|dt| dt.format(DATE).to_string()).unwrap_or_else(|| value.to_string())
}

/// `2024-01-10T14:05:09Z` -> `1/10/2024, 2:05:09 PM`
pub fn date_time(value: &str) -> String {
    parse(value).map(|dt| dt.format(DATE_TIME).to_string()).unwrap_or_else(|| value.to_string())
}

/// Like [date_time] but `-` when missing
pub fn optional_date_time(value: Option<&str>) -> String {
    value.map(date_time).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_date() {
        assert_eq!(date("2024-01-10"), "1/10/2024");
        assert_eq!(date("2024-11-03T23:30:00Z"), "11/3/2024");
        assert_eq!(date("2024-11-03T23:30:00.250"), "11/3/2024");
        assert_eq!(date("next tuesday"), "next tuesday");
    }

    #[test]
    fn test_date_time() {
        assert_eq!(date_time("2024-01-10T09:00:00Z"), "1/10/2024, 9:00:00 AM");
        assert_eq!(date_time("2024-01-10T14:05:09+02:00"), "1/10/2024, 2:05:09 PM");
        assert_eq!(date_time("2024-01-10 00:15:00"), "1/10/2024, 12:15:00 AM");
        assert_eq!(optional_date_time(None), "-");
        assert_eq!(optional_date_time(Some("2024-01-10T12:00:00.123456")), "1/10/2024, 12:00:00 PM");
    }
}
