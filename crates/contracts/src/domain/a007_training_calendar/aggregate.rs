use crate::shared::category::CategoryValue;
use crate::shared::dates::parse_date;
use crate::shared::export::CsvExportable;
use crate::shared::record_filter::FilterableRecord;
use crate::shared::record_sort::{cmp_text, Sortable};
use crate::shared::status_tone::StatusTone;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const FILTER_TOPIC: &str = "topic";
pub const FILTER_MODE: &str = "mode";
pub const FILTER_STATUS: &str = "status";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingTopic {
    AntiMoneyLaundering,
    InformationSecurity,
    DataPrivacy,
    CodeOfConduct,
    InsiderTrading,
    Whistleblowing,
}

impl CategoryValue for TrainingTopic {
    fn all() -> &'static [Self] {
        &[
            TrainingTopic::AntiMoneyLaundering,
            TrainingTopic::InformationSecurity,
            TrainingTopic::DataPrivacy,
            TrainingTopic::CodeOfConduct,
            TrainingTopic::InsiderTrading,
            TrainingTopic::Whistleblowing,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            TrainingTopic::AntiMoneyLaundering => "Anti-Money Laundering",
            TrainingTopic::InformationSecurity => "Information Security",
            TrainingTopic::DataPrivacy => "Data Privacy",
            TrainingTopic::CodeOfConduct => "Code of Conduct",
            TrainingTopic::InsiderTrading => "Insider Trading",
            TrainingTopic::Whistleblowing => "Whistleblowing",
        }
    }

    fn tone(&self) -> StatusTone {
        StatusTone::Neutral
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryMode {
    Online,
    Classroom,
    Hybrid,
}

impl CategoryValue for DeliveryMode {
    fn all() -> &'static [Self] {
        &[DeliveryMode::Online, DeliveryMode::Classroom, DeliveryMode::Hybrid]
    }

    fn as_str(&self) -> &'static str {
        match self {
            DeliveryMode::Online => "Online",
            DeliveryMode::Classroom => "Classroom",
            DeliveryMode::Hybrid => "Hybrid",
        }
    }

    fn tone(&self) -> StatusTone {
        StatusTone::Primary
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    Scheduled,
    Full,
    Completed,
    Cancelled,
}

impl CategoryValue for SessionStatus {
    fn all() -> &'static [Self] {
        &[
            SessionStatus::Scheduled,
            SessionStatus::Full,
            SessionStatus::Completed,
            SessionStatus::Cancelled,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Scheduled => "Scheduled",
            SessionStatus::Full => "Full",
            SessionStatus::Completed => "Completed",
            SessionStatus::Cancelled => "Cancelled",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            SessionStatus::Scheduled => StatusTone::Primary,
            SessionStatus::Full => StatusTone::Warning,
            SessionStatus::Completed => StatusTone::Success,
            SessionStatus::Cancelled => StatusTone::Error,
        }
    }
}

/// Compliance training session on the calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSession {
    pub id: String,
    pub title: String,
    pub topic: TrainingTopic,
    pub date: String,
    pub duration_hours: f32,
    pub mode: DeliveryMode,
    pub trainer: String,
    pub audience: String,
    pub enrolled: u32,
    pub capacity: u32,
    pub mandatory: bool,
    pub status: SessionStatus,
}

impl TrainingSession {
    /// Enrolment as a share of capacity; 0 when capacity is 0
    pub fn utilisation_percent(&self) -> u32 {
        if self.capacity == 0 {
            0
        } else {
            self.enrolled * 100 / self.capacity
        }
    }

    pub fn seats_left(&self) -> u32 {
        self.capacity.saturating_sub(self.enrolled)
    }

    /// Scheduled or full session on or after `today`
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        matches!(self.status, SessionStatus::Scheduled | SessionStatus::Full)
            && parse_date(&self.date).map_or(false, |d| d >= today)
    }
}

impl FilterableRecord for TrainingSession {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.trainer, &self.audience]
    }

    fn category_value(&self, key: &str) -> Option<&str> {
        match key {
            FILTER_TOPIC => Some(self.topic.as_str()),
            FILTER_MODE => Some(self.mode.as_str()),
            FILTER_STATUS => Some(self.status.as_str()),
            _ => None,
        }
    }
}

impl Sortable for TrainingSession {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "date" => self.date.cmp(&other.date),
            "title" => cmp_text(&self.title, &other.title),
            "topic" => self.topic.as_str().cmp(other.topic.as_str()),
            "trainer" => cmp_text(&self.trainer, &other.trainer),
            "utilisation" => self.utilisation_percent().cmp(&other.utilisation_percent()),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => Ordering::Equal,
        }
    }
}

impl CsvExportable for TrainingSession {
    fn headers() -> Vec<&'static str> {
        vec!["Date", "Title", "Topic", "Hours", "Mode", "Trainer", "Audience", "Enrolled", "Capacity", "Mandatory", "Status"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.title.clone(),
            self.topic.as_str().to_string(),
            format!("{:.1}", self.duration_hours),
            self.mode.as_str().to_string(),
            self.trainer.clone(),
            self.audience.clone(),
            self.enrolled.to_string(),
            self.capacity.to_string(),
            if self.mandatory { "Yes" } else { "No" }.to_string(),
            self.status.as_str().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_training_calendar::training_sessions;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date")
    }

    #[test]
    fn test_utilisation_and_seats() {
        let mut s = training_sessions()[0].clone();
        s.capacity = 40;
        s.enrolled = 30;
        assert_eq!(s.utilisation_percent(), 75);
        assert_eq!(s.seats_left(), 10);

        s.enrolled = 45;
        assert_eq!(s.seats_left(), 0);

        s.capacity = 0;
        assert_eq!(s.utilisation_percent(), 0);
    }

    #[test]
    fn test_upcoming_excludes_cancelled_and_past() {
        let mut s = training_sessions()[0].clone();
        s.date = "2026-10-20".to_string();
        s.status = SessionStatus::Scheduled;
        assert!(s.is_upcoming(today()));

        s.status = SessionStatus::Cancelled;
        assert!(!s.is_upcoming(today()));

        s.status = SessionStatus::Full;
        s.date = "2026-10-01".to_string();
        assert!(!s.is_upcoming(today()));
    }

    #[test]
    fn test_full_sessions_are_at_capacity() {
        for s in training_sessions().iter().filter(|s| s.status == SessionStatus::Full) {
            assert_eq!(s.seats_left(), 0, "{}", s.title);
        }
    }

    #[test]
    fn test_search_fields() {
        for r in training_sessions() {
            assert_eq!(
                r.search_fields(),
                vec![
                    r.title.as_str(),
                    r.trainer.as_str(),
                    r.audience.as_str(),
                ]
            );
        }
    }
}
