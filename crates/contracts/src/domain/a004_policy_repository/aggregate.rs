use crate::shared::category::CategoryValue;
use crate::shared::dates::is_before;
use crate::shared::export::CsvExportable;
use crate::shared::record_filter::FilterableRecord;
use crate::shared::record_sort::{cmp_text, Sortable};
use crate::shared::status_tone::StatusTone;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const FILTER_CATEGORY: &str = "category";
pub const FILTER_STATUS: &str = "status";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyCategory {
    InformationSecurity,
    DataPrivacy,
    HumanResources,
    Finance,
    Operations,
    Compliance,
}

impl CategoryValue for PolicyCategory {
    fn all() -> &'static [Self] {
        &[
            PolicyCategory::InformationSecurity,
            PolicyCategory::DataPrivacy,
            PolicyCategory::HumanResources,
            PolicyCategory::Finance,
            PolicyCategory::Operations,
            PolicyCategory::Compliance,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            PolicyCategory::InformationSecurity => "Information Security",
            PolicyCategory::DataPrivacy => "Data Privacy",
            PolicyCategory::HumanResources => "Human Resources",
            PolicyCategory::Finance => "Finance",
            PolicyCategory::Operations => "Operations",
            PolicyCategory::Compliance => "Compliance",
        }
    }

    fn tone(&self) -> StatusTone {
        StatusTone::Neutral
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyStatus {
    Active,
    UnderReview,
    Draft,
    Archived,
}

impl CategoryValue for PolicyStatus {
    fn all() -> &'static [Self] {
        &[
            PolicyStatus::Active,
            PolicyStatus::UnderReview,
            PolicyStatus::Draft,
            PolicyStatus::Archived,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            PolicyStatus::Active => "Active",
            PolicyStatus::UnderReview => "Under Review",
            PolicyStatus::Draft => "Draft",
            PolicyStatus::Archived => "Archived",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            PolicyStatus::Active => StatusTone::Success,
            PolicyStatus::UnderReview => StatusTone::Warning,
            PolicyStatus::Draft => StatusTone::Primary,
            PolicyStatus::Archived => StatusTone::Neutral,
        }
    }
}

/// Governed policy document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyEntry {
    pub id: String,
    pub code: String,
    pub title: String,
    pub category: PolicyCategory,
    pub version: String,
    pub owner: String,
    pub approver: String,
    pub status: PolicyStatus,
    pub effective_date: String,
    pub review_due: String,
    /// Share of staff who acknowledged the current version, 0..=100
    pub acknowledgement_rate: u8,
}

impl PolicyEntry {
    /// Archived policies are never reviewed again
    pub fn is_review_overdue(&self, today: NaiveDate) -> bool {
        self.status != PolicyStatus::Archived && is_before(&self.review_due, today)
    }
}

impl FilterableRecord for PolicyEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.code, &self.title, &self.owner]
    }

    fn category_value(&self, key: &str) -> Option<&str> {
        match key {
            FILTER_CATEGORY => Some(self.category.as_str()),
            FILTER_STATUS => Some(self.status.as_str()),
            _ => None,
        }
    }
}

impl Sortable for PolicyEntry {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.cmp(&other.code),
            "title" => cmp_text(&self.title, &other.title),
            "category" => self.category.as_str().cmp(other.category.as_str()),
            "owner" => cmp_text(&self.owner, &other.owner),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            "review_due" => self.review_due.cmp(&other.review_due),
            "acknowledgement_rate" => self.acknowledgement_rate.cmp(&other.acknowledgement_rate),
            _ => Ordering::Equal,
        }
    }
}

impl CsvExportable for PolicyEntry {
    fn headers() -> Vec<&'static str> {
        vec!["Code", "Title", "Category", "Version", "Owner", "Approver", "Status", "Effective", "Review Due", "Acknowledged %"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.title.clone(),
            self.category.as_str().to_string(),
            self.version.clone(),
            self.owner.clone(),
            self.approver.clone(),
            self.status.as_str().to_string(),
            self.effective_date.clone(),
            self.review_due.clone(),
            self.acknowledgement_rate.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_policy_repository::policies;
    use crate::shared::record_filter::{filter_records, FilterCriteria};

    #[test]
    fn test_search_by_code_prefix() {
        let result = filter_records(policies(), &FilterCriteria::new().with_query("pol-is"));
        assert!(!result.is_empty());
        assert!(result.iter().all(|p| p.code.starts_with("POL-IS")));
    }

    #[test]
    fn test_status_filter_uses_display_value() {
        let criteria = FilterCriteria::new().with_category(FILTER_STATUS, "Under Review");
        let result = filter_records(policies(), &criteria);
        assert!(!result.is_empty());
        assert!(result.iter().all(|p| p.status == PolicyStatus::UnderReview));
    }

    #[test]
    fn test_archived_policy_is_never_overdue() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date");
        let mut policy = policies()[0].clone();
        policy.review_due = "2020-01-01".to_string();
        policy.status = PolicyStatus::Active;
        assert!(policy.is_review_overdue(today));
        policy.status = PolicyStatus::Archived;
        assert!(!policy.is_review_overdue(today));
    }

    #[test]
    fn test_search_fields() {
        for r in policies() {
            assert_eq!(
                r.search_fields(),
                vec![
                    r.code.as_str(),
                    r.title.as_str(),
                    r.owner.as_str(),
                ]
            );
        }
    }
}
