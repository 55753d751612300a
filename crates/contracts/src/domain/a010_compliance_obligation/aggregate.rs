use crate::enums::Frequency;
use crate::shared::category::CategoryValue;
use crate::shared::dates::days_between;
use crate::shared::export::CsvExportable;
use crate::shared::record_filter::FilterableRecord;
use crate::shared::record_sort::{cmp_text, Sortable};
use crate::shared::status_tone::StatusTone;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const FILTER_FREQUENCY: &str = "frequency";
pub const FILTER_COMPLIANCE: &str = "compliance";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplianceStatus {
    Compliant,
    PartiallyCompliant,
    NonCompliant,
    NotAssessed,
}

impl CategoryValue for ComplianceStatus {
    fn all() -> &'static [Self] {
        &[
            ComplianceStatus::Compliant,
            ComplianceStatus::PartiallyCompliant,
            ComplianceStatus::NonCompliant,
            ComplianceStatus::NotAssessed,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Compliant",
            ComplianceStatus::PartiallyCompliant => "Partially Compliant",
            ComplianceStatus::NonCompliant => "Non-Compliant",
            ComplianceStatus::NotAssessed => "Not Assessed",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            ComplianceStatus::Compliant => StatusTone::Success,
            ComplianceStatus::PartiallyCompliant => StatusTone::Warning,
            ComplianceStatus::NonCompliant => StatusTone::Error,
            ComplianceStatus::NotAssessed => StatusTone::Neutral,
        }
    }
}

/// Row of the regulatory obligations register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceObligation {
    pub id: String,
    pub regulation: String,
    pub requirement: String,
    pub function: String,
    pub owner: String,
    pub frequency: Frequency,
    pub compliance: ComplianceStatus,
    pub last_reviewed: String,
}

impl ComplianceObligation {
    /// Days a review may lag before the obligation is considered stale
    pub fn review_interval_days(&self) -> Option<i64> {
        match self.frequency {
            Frequency::Monthly => Some(31),
            Frequency::Quarterly => Some(92),
            Frequency::HalfYearly => Some(183),
            Frequency::Annual => Some(366),
            Frequency::EventBased => None,
        }
    }

    pub fn is_review_stale(&self, today: NaiveDate) -> bool {
        match (self.review_interval_days(), days_between(today, &self.last_reviewed)) {
            (Some(interval), Some(days)) => -days > interval,
            _ => false,
        }
    }

    pub fn needs_attention(&self) -> bool {
        matches!(
            self.compliance,
            ComplianceStatus::NonCompliant | ComplianceStatus::PartiallyCompliant
        )
    }
}

impl FilterableRecord for ComplianceObligation {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.regulation, &self.requirement, &self.owner, &self.function]
    }

    fn category_value(&self, key: &str) -> Option<&str> {
        match key {
            FILTER_FREQUENCY => Some(self.frequency.as_str()),
            FILTER_COMPLIANCE => Some(self.compliance.as_str()),
            _ => None,
        }
    }
}

impl Sortable for ComplianceObligation {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "regulation" => cmp_text(&self.regulation, &other.regulation),
            "function" => cmp_text(&self.function, &other.function),
            "owner" => cmp_text(&self.owner, &other.owner),
            "compliance" => (self.compliance as u8).cmp(&(other.compliance as u8)),
            "last_reviewed" => self.last_reviewed.cmp(&other.last_reviewed),
            _ => Ordering::Equal,
        }
    }
}

impl CsvExportable for ComplianceObligation {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Regulation", "Requirement", "Function", "Owner", "Frequency", "Compliance", "Last Reviewed"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.regulation.clone(),
            self.requirement.clone(),
            self.function.clone(),
            self.owner.clone(),
            self.frequency.as_str().to_string(),
            self.compliance.as_str().to_string(),
            self.last_reviewed.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a010_compliance_obligation::obligations;
    use crate::shared::record_filter::{filter_records, FilterCriteria};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_stale_review_depends_on_frequency() {
        let mut obligation = obligations()[0].clone();
        obligation.last_reviewed = "2026-08-01".to_string();

        obligation.frequency = Frequency::Monthly;
        assert!(obligation.is_review_stale(today()));

        obligation.frequency = Frequency::Quarterly;
        assert!(!obligation.is_review_stale(today()));

        obligation.frequency = Frequency::EventBased;
        assert!(!obligation.is_review_stale(today()));
    }

    #[test]
    fn test_filter_by_hyphenated_value() {
        let criteria = FilterCriteria::new().with_category(FILTER_COMPLIANCE, "Non-Compliant");
        let result = filter_records(obligations(), &criteria);
        assert!(!result.is_empty());
        assert!(result.iter().all(|o| o.compliance == ComplianceStatus::NonCompliant));
    }

    #[test]
    fn test_search_requirement_text() {
        let result = filter_records(obligations(), &FilterCriteria::new().with_query("cyber"));
        assert!(result.iter().all(|o| {
            [&o.regulation, &o.requirement, &o.owner, &o.function]
                .iter()
                .any(|f| f.to_lowercase().contains("cyber"))
        }));
        assert!(!result.is_empty());
    }

    #[test]
    fn test_search_fields() {
        for r in obligations() {
            assert_eq!(
                r.search_fields(),
                vec![
                    r.regulation.as_str(),
                    r.requirement.as_str(),
                    r.owner.as_str(),
                    r.function.as_str(),
                ]
            );
        }
    }
}
