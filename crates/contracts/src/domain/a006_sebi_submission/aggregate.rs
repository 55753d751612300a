use crate::enums::Frequency;
use crate::shared::category::CategoryValue;
use crate::shared::dates::{days_between, is_before};
use crate::shared::export::CsvExportable;
use crate::shared::record_filter::FilterableRecord;
use crate::shared::record_sort::{cmp_text, Sortable};
use crate::shared::status_tone::StatusTone;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const FILTER_FREQUENCY: &str = "frequency";
pub const FILTER_STATUS: &str = "status";

/// Days before the due date from which a pending filing is "due soon"
pub const DUE_SOON_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Submitted,
    Pending,
    UnderReview,
    Overdue,
    Rejected,
}

impl CategoryValue for SubmissionStatus {
    fn all() -> &'static [Self] {
        &[
            SubmissionStatus::Submitted,
            SubmissionStatus::Pending,
            SubmissionStatus::UnderReview,
            SubmissionStatus::Overdue,
            SubmissionStatus::Rejected,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Submitted => "Submitted",
            SubmissionStatus::Pending => "Pending",
            SubmissionStatus::UnderReview => "Under Review",
            SubmissionStatus::Overdue => "Overdue",
            SubmissionStatus::Rejected => "Rejected",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            SubmissionStatus::Submitted => StatusTone::Success,
            SubmissionStatus::Pending => StatusTone::Warning,
            SubmissionStatus::UnderReview => StatusTone::Primary,
            SubmissionStatus::Overdue | SubmissionStatus::Rejected => StatusTone::Error,
        }
    }
}

/// Filing owed to SEBI or a stock exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulatorySubmission {
    pub id: String,
    pub reference: String,
    pub title: String,
    pub regulation: String,
    pub authority: String,
    pub frequency: Frequency,
    pub period: String,
    pub due_date: String,
    pub submitted_on: Option<String>,
    pub status: SubmissionStatus,
    pub owner: String,
}

impl RegulatorySubmission {
    pub fn is_submitted(&self) -> bool {
        self.submitted_on.is_some()
            || matches!(self.status, SubmissionStatus::Submitted | SubmissionStatus::UnderReview)
    }

    /// Signed days to the due date, `None` for malformed dates
    pub fn days_until_due(&self, today: NaiveDate) -> Option<i64> {
        days_between(today, &self.due_date)
    }

    /// Not submitted and past its due date
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_submitted() && is_before(&self.due_date, today)
    }

    pub fn is_due_soon(&self, today: NaiveDate) -> bool {
        !self.is_submitted()
            && self
                .days_until_due(today)
                .map_or(false, |days| (0..=DUE_SOON_DAYS).contains(&days))
    }

    /// Filed after the due date
    pub fn filed_late(&self) -> bool {
        self.submitted_on
            .as_deref()
            .map_or(false, |filed| filed > self.due_date.as_str())
    }
}

impl FilterableRecord for RegulatorySubmission {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.reference, &self.title, &self.regulation, &self.owner]
    }

    fn category_value(&self, key: &str) -> Option<&str> {
        match key {
            FILTER_FREQUENCY => Some(self.frequency.as_str()),
            FILTER_STATUS => Some(self.status.as_str()),
            _ => None,
        }
    }
}

impl Sortable for RegulatorySubmission {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "reference" => self.reference.cmp(&other.reference),
            "title" => cmp_text(&self.title, &other.title),
            "regulation" => cmp_text(&self.regulation, &other.regulation),
            "due_date" => self.due_date.cmp(&other.due_date),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            "owner" => cmp_text(&self.owner, &other.owner),
            _ => Ordering::Equal,
        }
    }
}

impl CsvExportable for RegulatorySubmission {
    fn headers() -> Vec<&'static str> {
        vec!["Reference", "Title", "Regulation", "Authority", "Frequency", "Period", "Due Date", "Submitted On", "Status", "Owner"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.reference.clone(),
            self.title.clone(),
            self.regulation.clone(),
            self.authority.clone(),
            self.frequency.as_str().to_string(),
            self.period.clone(),
            self.due_date.clone(),
            self.submitted_on.clone().unwrap_or_default(),
            self.status.as_str().to_string(),
            self.owner.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_sebi_submission::submissions;
    use crate::shared::record_filter::{filter_records, FilterCriteria};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date")
    }

    fn pending(due: &str) -> RegulatorySubmission {
        let mut s = submissions()[0].clone();
        s.due_date = due.to_string();
        s.submitted_on = None;
        s.status = SubmissionStatus::Pending;
        s
    }

    #[test]
    fn test_overdue_only_when_not_submitted() {
        let mut s = pending("2026-10-10");
        assert!(s.is_overdue(today()));
        assert_eq!(s.days_until_due(today()), Some(-6));

        s.submitted_on = Some("2026-10-12".to_string());
        s.status = SubmissionStatus::Submitted;
        assert!(!s.is_overdue(today()));
        assert!(s.filed_late());
    }

    #[test]
    fn test_due_soon_window() {
        assert!(pending("2026-10-16").is_due_soon(today()));
        assert!(pending("2026-10-23").is_due_soon(today()));
        assert!(!pending("2026-10-24").is_due_soon(today()));
        assert!(!pending("2026-10-15").is_due_soon(today()));
    }

    #[test]
    fn test_search_by_regulation() {
        let result = filter_records(submissions(), &FilterCriteria::new().with_query("lodr"));
        assert!(!result.is_empty());
        assert!(result.iter().all(|s| s.search_fields().iter().any(|f| f.to_lowercase().contains("lodr"))));
    }

    #[test]
    fn test_sample_status_overdue_agrees_with_dates() {
        for s in submissions().iter().filter(|s| s.status == SubmissionStatus::Overdue) {
            assert!(s.is_overdue(today()), "{}", s.reference);
        }
    }

    #[test]
    fn test_search_fields() {
        for r in submissions() {
            assert_eq!(
                r.search_fields(),
                vec![
                    r.reference.as_str(),
                    r.title.as_str(),
                    r.regulation.as_str(),
                    r.owner.as_str(),
                ]
            );
        }
    }
}
