use crate::enums::RiskLevel;
use crate::shared::category::CategoryValue;
use crate::shared::dates::{days_between, is_before};
use crate::shared::export::CsvExportable;
use crate::shared::record_filter::FilterableRecord;
use crate::shared::record_sort::{cmp_text, Sortable};
use crate::shared::status_tone::StatusTone;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const FILTER_RISK_LEVEL: &str = "risk_level";
pub const FILTER_STATUS: &str = "status";

/// Approved exceptions expiring within this many days are flagged for renewal
pub const EXPIRY_WARNING_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
    Expired,
}

impl CategoryValue for ApprovalStatus {
    fn all() -> &'static [Self] {
        &[
            ApprovalStatus::Pending,
            ApprovalStatus::Approved,
            ApprovalStatus::Rejected,
            ApprovalStatus::Expired,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "Pending",
            ApprovalStatus::Approved => "Approved",
            ApprovalStatus::Rejected => "Rejected",
            ApprovalStatus::Expired => "Expired",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            ApprovalStatus::Pending => StatusTone::Warning,
            ApprovalStatus::Approved => StatusTone::Success,
            ApprovalStatus::Rejected => StatusTone::Error,
            ApprovalStatus::Expired => StatusTone::Neutral,
        }
    }
}

/// Request to deviate from a policy for a limited period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyException {
    pub id: String,
    pub policy_code: String,
    pub requested_by: String,
    pub department: String,
    pub justification: String,
    pub compensating_control: String,
    pub risk_level: RiskLevel,
    pub status: ApprovalStatus,
    pub requested_on: String,
    pub expires_on: String,
}

impl PolicyException {
    /// Past its end date, whatever the recorded status says
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.status == ApprovalStatus::Expired || is_before(&self.expires_on, today)
    }

    pub fn expires_soon(&self, today: NaiveDate) -> bool {
        self.status == ApprovalStatus::Approved
            && days_between(today, &self.expires_on)
                .map_or(false, |days| (0..=EXPIRY_WARNING_DAYS).contains(&days))
    }
}

impl FilterableRecord for PolicyException {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.policy_code, &self.requested_by, &self.department, &self.justification]
    }

    fn category_value(&self, key: &str) -> Option<&str> {
        match key {
            FILTER_RISK_LEVEL => Some(self.risk_level.as_str()),
            FILTER_STATUS => Some(self.status.as_str()),
            _ => None,
        }
    }
}

impl Sortable for PolicyException {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "policy_code" => self.policy_code.cmp(&other.policy_code),
            "requested_by" => cmp_text(&self.requested_by, &other.requested_by),
            "department" => cmp_text(&self.department, &other.department),
            "risk_level" => self.risk_level.cmp(&other.risk_level),
            "requested_on" => self.requested_on.cmp(&other.requested_on),
            "expires_on" => self.expires_on.cmp(&other.expires_on),
            _ => Ordering::Equal,
        }
    }
}

impl CsvExportable for PolicyException {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Policy", "Requested By", "Department", "Justification", "Compensating Control", "Risk", "Status", "Requested On", "Expires On"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.policy_code.clone(),
            self.requested_by.clone(),
            self.department.clone(),
            self.justification.clone(),
            self.compensating_control.clone(),
            self.risk_level.as_str().to_string(),
            self.status.as_str().to_string(),
            self.requested_on.clone(),
            self.expires_on.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a012_policy_exception::policy_exceptions;
    use crate::shared::record_filter::{filter_records, FilterCriteria};
    use crate::shared::record_sort::sort_records;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_is_expired_by_date_or_status() {
        let mut exception = policy_exceptions()[0].clone();
        exception.status = ApprovalStatus::Approved;
        exception.expires_on = "2026-10-15".to_string();
        assert!(exception.is_expired(today()));

        exception.expires_on = "2026-10-16".to_string();
        assert!(!exception.is_expired(today()));
        assert!(exception.expires_soon(today()));

        exception.status = ApprovalStatus::Expired;
        assert!(exception.is_expired(today()));
    }

    #[test]
    fn test_pending_high_risk_filter() {
        let criteria = FilterCriteria::new()
            .with_category(FILTER_RISK_LEVEL, "High")
            .with_category(FILTER_STATUS, "Pending");
        let result = filter_records(policy_exceptions(), &criteria);
        assert!(!result.is_empty());
        assert!(result
            .iter()
            .all(|e| e.risk_level == RiskLevel::High && e.status == ApprovalStatus::Pending));
    }

    #[test]
    fn test_sort_by_risk_level_uses_severity_order() {
        let mut rows = policy_exceptions().to_vec();
        sort_records(&mut rows, "risk_level", false);
        assert_eq!(rows[0].risk_level, RiskLevel::Critical);
        assert!(rows.windows(2).all(|w| w[0].risk_level >= w[1].risk_level));
    }

    #[test]
    fn test_search_fields() {
        for r in policy_exceptions() {
            assert_eq!(
                r.search_fields(),
                vec![
                    r.policy_code.as_str(),
                    r.requested_by.as_str(),
                    r.department.as_str(),
                    r.justification.as_str(),
                ]
            );
        }
    }

    #[test]
    fn test_id_is_not_searchable() {
        let result = filter_records(policy_exceptions(), &FilterCriteria::new().with_query("EXC-031"));
        assert!(result.is_empty());
    }
}
