//! Date formatting for table cells
//!
//! Sample data holds ISO literals; tables show DD.MM.YYYY.

use chrono::NaiveDate;
use contracts::shared::config::DashboardConfig;
use leptos::prelude::use_context;

/// "Today" for overdue and upcoming cells, from the configuration in context
pub fn reference_date() -> NaiveDate {
    use_context::<DashboardConfig>()
        .expect("DashboardConfig not found")
        .today()
}

/// "2026-10-15T14:02:26" -> "15.10.2026 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let date = format_date(date_part);
        if date != date_part {
            let time: String = time_part.chars().take(5).collect();
            return format!("{} {}", date, time);
        }
    }
    datetime_str.to_string()
}

/// "2026-10-15" or "2026-10-15T14:02:26" -> "15.10.2026"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// "in 3 days", "today", "5 days ago"
pub fn format_relative_days(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        d if d > 0 => format!("in {} days", d),
        d => format!("{} days ago", -d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2026-10-15T14:02:26"), "15.10.2026 14:02");
        assert_eq!(format_datetime("2026-12-31T23:59:59"), "31.12.2026 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-03-15"), "15.03.2026");
        assert_eq!(format_date("2026-03-15T14:02:26"), "15.03.2026");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_relative_days() {
        assert_eq!(format_relative_days(0), "today");
        assert_eq!(format_relative_days(3), "in 3 days");
        assert_eq!(format_relative_days(-1), "yesterday");
        assert_eq!(format_relative_days(-12), "12 days ago");
    }
}
