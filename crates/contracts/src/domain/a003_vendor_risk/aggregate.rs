use crate::enums::RiskLevel;
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
pub const FILTER_RISK_LEVEL: &str = "risk_level";
pub const FILTER_ASSESSMENT: &str = "assessment_status";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VendorCategory {
    CloudHosting,
    Payments,
    DataAnalytics,
    Consulting,
    Facilities,
    Telecom,
}

impl CategoryValue for VendorCategory {
    fn all() -> &'static [Self] {
        &[
            VendorCategory::CloudHosting,
            VendorCategory::Payments,
            VendorCategory::DataAnalytics,
            VendorCategory::Consulting,
            VendorCategory::Facilities,
            VendorCategory::Telecom,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            VendorCategory::CloudHosting => "Cloud Hosting",
            VendorCategory::Payments => "Payments",
            VendorCategory::DataAnalytics => "Data Analytics",
            VendorCategory::Consulting => "Consulting",
            VendorCategory::Facilities => "Facilities",
            VendorCategory::Telecom => "Telecom",
        }
    }

    fn tone(&self) -> StatusTone {
        StatusTone::Neutral
    }
}

/// State of the periodic due-diligence assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssessmentStatus {
    Completed,
    InProgress,
    Pending,
    Overdue,
}

impl CategoryValue for AssessmentStatus {
    fn all() -> &'static [Self] {
        &[
            AssessmentStatus::Completed,
            AssessmentStatus::InProgress,
            AssessmentStatus::Pending,
            AssessmentStatus::Overdue,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            AssessmentStatus::Completed => "Completed",
            AssessmentStatus::InProgress => "In Progress",
            AssessmentStatus::Pending => "Pending",
            AssessmentStatus::Overdue => "Overdue",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            AssessmentStatus::Completed => StatusTone::Success,
            AssessmentStatus::InProgress => StatusTone::Primary,
            AssessmentStatus::Pending => StatusTone::Warning,
            AssessmentStatus::Overdue => StatusTone::Error,
        }
    }
}

/// Third-party vendor with its risk rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorRiskEntry {
    pub id: String,
    pub vendor_name: String,
    pub services: String,
    pub category: VendorCategory,
    pub risk_level: RiskLevel,
    /// 0..=100, higher is riskier
    pub risk_score: u8,
    pub assessment_status: AssessmentStatus,
    pub last_assessed: String,
    pub next_review: String,
    pub owner: String,
    /// Annual contract value, INR lakh
    pub contract_value: f64,
    pub handles_personal_data: bool,
}

impl VendorRiskEntry {
    pub fn is_review_overdue(&self, today: NaiveDate) -> bool {
        is_before(&self.next_review, today)
    }
}

impl FilterableRecord for VendorRiskEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.vendor_name, &self.owner, &self.services]
    }

    fn category_value(&self, key: &str) -> Option<&str> {
        match key {
            FILTER_CATEGORY => Some(self.category.as_str()),
            FILTER_RISK_LEVEL => Some(self.risk_level.as_str()),
            FILTER_ASSESSMENT => Some(self.assessment_status.as_str()),
            _ => None,
        }
    }
}

impl Sortable for VendorRiskEntry {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "vendor_name" => cmp_text(&self.vendor_name, &other.vendor_name),
            "category" => self.category.as_str().cmp(other.category.as_str()),
            "risk_level" => self.risk_level.cmp(&other.risk_level),
            "risk_score" => self.risk_score.cmp(&other.risk_score),
            "assessment_status" => self.assessment_status.as_str().cmp(other.assessment_status.as_str()),
            "next_review" => self.next_review.cmp(&other.next_review),
            "owner" => cmp_text(&self.owner, &other.owner),
            "contract_value" => self
                .contract_value
                .partial_cmp(&other.contract_value)
                .unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    }
}

impl CsvExportable for VendorRiskEntry {
    fn headers() -> Vec<&'static str> {
        vec![
            "Vendor",
            "Services",
            "Category",
            "Risk Level",
            "Risk Score",
            "Assessment",
            "Last Assessed",
            "Next Review",
            "Owner",
            "Contract Value (INR lakh)",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.vendor_name.clone(),
            self.services.clone(),
            self.category.as_str().to_string(),
            self.risk_level.as_str().to_string(),
            self.risk_score.to_string(),
            self.assessment_status.as_str().to_string(),
            self.last_assessed.clone(),
            self.next_review.clone(),
            self.owner.clone(),
            format!("{:.2}", self.contract_value),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_vendor_risk::vendors;
    use crate::shared::record_filter::{filter_records, FilterCriteria};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date")
    }

    #[test]
    fn test_three_filters_are_conjunctive() {
        let criteria = FilterCriteria::new()
            .with_category(FILTER_RISK_LEVEL, "High")
            .with_category(FILTER_CATEGORY, "Cloud Hosting");
        let result = filter_records(vendors(), &criteria);
        assert!(result
            .iter()
            .all(|v| v.risk_level == RiskLevel::High && v.category == VendorCategory::CloudHosting));

        let stricter = criteria.with_category(FILTER_ASSESSMENT, "Completed");
        assert!(filter_records(vendors(), &stricter).len() <= result.len());
    }

    #[test]
    fn test_search_by_service_description() {
        let result = filter_records(vendors(), &FilterCriteria::new().with_query("payment gateway"));
        assert!(!result.is_empty());
    }

    #[test]
    fn test_review_overdue() {
        let mut vendor = vendors()[0].clone();
        vendor.next_review = "2026-10-01".to_string();
        assert!(vendor.is_review_overdue(today()));
        vendor.next_review = "2026-12-01".to_string();
        assert!(!vendor.is_review_overdue(today()));
    }

    #[test]
    fn test_score_agrees_with_level() {
        for vendor in vendors() {
            let expected = match vendor.risk_score {
                0..=39 => RiskLevel::Low,
                40..=59 => RiskLevel::Medium,
                60..=79 => RiskLevel::High,
                _ => RiskLevel::Critical,
            };
            assert_eq!(vendor.risk_level, expected, "{}", vendor.vendor_name);
        }
    }

    #[test]
    fn test_search_fields() {
        for r in vendors() {
            assert_eq!(
                r.search_fields(),
                vec![
                    r.vendor_name.as_str(),
                    r.owner.as_str(),
                    r.services.as_str(),
                ]
            );
        }
    }
}
