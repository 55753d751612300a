//! Date helpers for the ISO literals used in the sample data.

use chrono::{NaiveDate, NaiveDateTime};

/// Parses `YYYY-MM-DD`, also accepting a timestamp and using its date part
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Parses `YYYY-MM-DDTHH:MM:SS`
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").ok()
}

/// Signed number of days from `today` to `date`; negative when past
pub fn days_between(today: NaiveDate, date: &str) -> Option<i64> {
    parse_date(date).map(|d| (d - today).num_days())
}

/// `true` when `date` is strictly before `today`; unparsable dates are never
/// considered past
pub fn is_before(date: &str, today: NaiveDate) -> bool {
    parse_date(date).map_or(false, |d| d < today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_parse_date_accepts_timestamp() {
        assert_eq!(parse_date("2026-10-16"), Some(day(2026, 10, 16)));
        assert_eq!(parse_date("2026-10-16T08:30:00"), Some(day(2026, 10, 16)));
        assert_eq!(parse_date("16.10.2026"), None);
    }

    #[test]
    fn test_parse_datetime() {
        let dt = parse_datetime("2026-10-16T08:30:05").expect("timestamp");
        assert_eq!(dt.format("%H:%M:%S").to_string(), "08:30:05");
        assert!(parse_datetime("2026-10-16").is_none());
    }

    #[test]
    fn test_days_between() {
        let today = day(2026, 10, 16);
        assert_eq!(days_between(today, "2026-10-20"), Some(4));
        assert_eq!(days_between(today, "2026-10-10"), Some(-6));
        assert_eq!(days_between(today, "bad"), None);
    }

    #[test]
    fn test_is_before() {
        let today = day(2026, 10, 16);
        assert!(is_before("2026-10-15", today));
        assert!(!is_before("2026-10-16", today));
        assert!(!is_before("not a date", today));
    }
}
