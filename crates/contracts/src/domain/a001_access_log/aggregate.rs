use crate::shared::category::CategoryValue;
use crate::shared::export::CsvExportable;
use crate::shared::record_filter::FilterableRecord;
use crate::shared::record_sort::{cmp_text, Sortable};
use crate::shared::status_tone::StatusTone;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const FILTER_ACTION: &str = "action";
pub const FILTER_OUTCOME: &str = "outcome";

/// What the user did with the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessAction {
    Viewed,
    Downloaded,
    Edited,
    Shared,
    Printed,
    Deleted,
}

impl CategoryValue for AccessAction {
    fn all() -> &'static [Self] {
        &[
            AccessAction::Viewed,
            AccessAction::Downloaded,
            AccessAction::Edited,
            AccessAction::Shared,
            AccessAction::Printed,
            AccessAction::Deleted,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            AccessAction::Viewed => "Viewed",
            AccessAction::Downloaded => "Downloaded",
            AccessAction::Edited => "Edited",
            AccessAction::Shared => "Shared",
            AccessAction::Printed => "Printed",
            AccessAction::Deleted => "Deleted",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            AccessAction::Viewed => StatusTone::Neutral,
            AccessAction::Downloaded | AccessAction::Printed => StatusTone::Primary,
            AccessAction::Edited | AccessAction::Shared => StatusTone::Warning,
            AccessAction::Deleted => StatusTone::Error,
        }
    }
}

/// Result of the access check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessOutcome {
    Granted,
    Denied,
    Flagged,
}

impl CategoryValue for AccessOutcome {
    fn all() -> &'static [Self] {
        &[AccessOutcome::Granted, AccessOutcome::Denied, AccessOutcome::Flagged]
    }

    fn as_str(&self) -> &'static str {
        match self {
            AccessOutcome::Granted => "Granted",
            AccessOutcome::Denied => "Denied",
            AccessOutcome::Flagged => "Flagged",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            AccessOutcome::Granted => StatusTone::Success,
            AccessOutcome::Denied => StatusTone::Error,
            AccessOutcome::Flagged => StatusTone::Warning,
        }
    }
}

/// One document access event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessLogEntry {
    pub id: String,
    pub timestamp: String,
    pub user: String,
    pub department: String,
    pub document: String,
    pub classification: String,
    pub action: AccessAction,
    pub ip_address: String,
    pub outcome: AccessOutcome,
}

impl AccessLogEntry {
    /// Denied or flagged accesses of restricted material need a reviewer
    pub fn needs_review(&self) -> bool {
        self.outcome != AccessOutcome::Granted
            || (self.classification == "Restricted" && self.action == AccessAction::Downloaded)
    }
}

impl FilterableRecord for AccessLogEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.user, &self.document, &self.ip_address, &self.department]
    }

    fn category_value(&self, key: &str) -> Option<&str> {
        match key {
            FILTER_ACTION => Some(self.action.as_str()),
            FILTER_OUTCOME => Some(self.outcome.as_str()),
            _ => None,
        }
    }
}

impl Sortable for AccessLogEntry {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "timestamp" => self.timestamp.cmp(&other.timestamp),
            "user" => cmp_text(&self.user, &other.user),
            "department" => cmp_text(&self.department, &other.department),
            "document" => cmp_text(&self.document, &other.document),
            "action" => self.action.as_str().cmp(other.action.as_str()),
            "outcome" => self.outcome.as_str().cmp(other.outcome.as_str()),
            _ => Ordering::Equal,
        }
    }
}

impl CsvExportable for AccessLogEntry {
    fn headers() -> Vec<&'static str> {
        vec!["Timestamp", "User", "Department", "Document", "Classification", "Action", "IP Address", "Outcome"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.user.clone(),
            self.department.clone(),
            self.document.clone(),
            self.classification.clone(),
            self.action.as_str().to_string(),
            self.ip_address.clone(),
            self.outcome.as_str().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_access_log::sample_data::access_log;
    use crate::shared::record_filter::{filter_records, FilterCriteria};

    #[test]
    fn test_search_by_user_is_case_insensitive() {
        let lower = filter_records(access_log(), &FilterCriteria::new().with_query("alice"));
        let upper = filter_records(access_log(), &FilterCriteria::new().with_query("ALICE"));
        assert!(!lower.is_empty());
        assert_eq!(lower, upper);
        assert!(lower.iter().all(|e| e.search_fields().iter().any(|f| f.to_lowercase().contains("alice"))));
    }

    #[test]
    fn test_search_by_ip_address() {
        let result = filter_records(access_log(), &FilterCriteria::new().with_query("10.0.4."));
        assert!(!result.is_empty());
        assert!(result.iter().all(|e| e.ip_address.starts_with("10.0.4.")));
    }

    #[test]
    fn test_action_and_outcome_filters_combine() {
        let denied = FilterCriteria::new().with_category(FILTER_OUTCOME, "Denied");
        let denied_downloads = denied.clone().with_category(FILTER_ACTION, "Downloaded");

        let all_denied = filter_records(access_log(), &denied);
        let narrowed = filter_records(access_log(), &denied_downloads);
        assert!(!all_denied.is_empty());
        assert!(narrowed.len() <= all_denied.len());
        assert!(narrowed
            .iter()
            .all(|e| e.outcome == AccessOutcome::Denied && e.action == AccessAction::Downloaded));
    }

    #[test]
    fn test_needs_review() {
        let mut entry = access_log()[0].clone();
        entry.outcome = AccessOutcome::Granted;
        entry.classification = "Internal".to_string();
        entry.action = AccessAction::Viewed;
        assert!(!entry.needs_review());

        entry.classification = "Restricted".to_string();
        entry.action = AccessAction::Downloaded;
        assert!(entry.needs_review());

        entry.action = AccessAction::Viewed;
        entry.outcome = AccessOutcome::Flagged;
        assert!(entry.needs_review());
    }

    #[test]
    fn test_csv_row_matches_headers() {
        let row = access_log()[0].to_csv_row();
        assert_eq!(row.len(), AccessLogEntry::headers().len());
    }

    #[test]
    fn test_search_fields() {
        for r in access_log() {
            assert_eq!(
                r.search_fields(),
                vec![
                    r.user.as_str(),
                    r.document.as_str(),
                    r.ip_address.as_str(),
                    r.department.as_str(),
                ]
            );
        }
    }
}
