use crate::enums::RiskLevel;
use crate::shared::category::CategoryValue;
use crate::shared::export::CsvExportable;
use crate::shared::record_filter::FilterableRecord;
use crate::shared::record_sort::{cmp_text, Sortable};
use crate::shared::status_tone::StatusTone;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const FILTER_CATEGORY: &str = "category";
pub const FILTER_LEVEL: &str = "level";
pub const FILTER_STATUS: &str = "status";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    Strategic,
    Operational,
    Financial,
    Compliance,
    Technology,
    Reputational,
}

impl CategoryValue for RiskCategory {
    fn all() -> &'static [Self] {
        &[
            RiskCategory::Strategic,
            RiskCategory::Operational,
            RiskCategory::Financial,
            RiskCategory::Compliance,
            RiskCategory::Technology,
            RiskCategory::Reputational,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Strategic => "Strategic",
            RiskCategory::Operational => "Operational",
            RiskCategory::Financial => "Financial",
            RiskCategory::Compliance => "Compliance",
            RiskCategory::Technology => "Technology",
            RiskCategory::Reputational => "Reputational",
        }
    }

    fn tone(&self) -> StatusTone {
        StatusTone::Neutral
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Treatment {
    Mitigate,
    Accept,
    Transfer,
    Avoid,
}

impl CategoryValue for Treatment {
    fn all() -> &'static [Self] {
        &[Treatment::Mitigate, Treatment::Accept, Treatment::Transfer, Treatment::Avoid]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Treatment::Mitigate => "Mitigate",
            Treatment::Accept => "Accept",
            Treatment::Transfer => "Transfer",
            Treatment::Avoid => "Avoid",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            Treatment::Accept => StatusTone::Warning,
            _ => StatusTone::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskStatus {
    Open,
    Monitoring,
    Closed,
}

impl CategoryValue for RiskStatus {
    fn all() -> &'static [Self] {
        &[RiskStatus::Open, RiskStatus::Monitoring, RiskStatus::Closed]
    }

    fn as_str(&self) -> &'static str {
        match self {
            RiskStatus::Open => "Open",
            RiskStatus::Monitoring => "Monitoring",
            RiskStatus::Closed => "Closed",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            RiskStatus::Open => StatusTone::Error,
            RiskStatus::Monitoring => StatusTone::Warning,
            RiskStatus::Closed => StatusTone::Success,
        }
    }
}

/// Enterprise risk register line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: RiskCategory,
    /// 1..=5
    pub likelihood: u8,
    /// 1..=5
    pub impact: u8,
    pub owner: String,
    pub treatment: Treatment,
    pub status: RiskStatus,
    pub last_reviewed: String,
}

impl RiskEntry {
    /// Likelihood x impact on the 5x5 matrix
    pub fn score(&self) -> u8 {
        self.likelihood.clamp(1, 5) * self.impact.clamp(1, 5)
    }

    pub fn level(&self) -> RiskLevel {
        RiskLevel::from_score(self.score())
    }
}

impl FilterableRecord for RiskEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.owner, &self.description]
    }

    fn category_value(&self, key: &str) -> Option<&str> {
        match key {
            FILTER_CATEGORY => Some(self.category.as_str()),
            FILTER_LEVEL => Some(self.level().as_str()),
            FILTER_STATUS => Some(self.status.as_str()),
            _ => None,
        }
    }
}

impl Sortable for RiskEntry {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "title" => cmp_text(&self.title, &other.title),
            "category" => self.category.as_str().cmp(other.category.as_str()),
            "score" => self.score().cmp(&other.score()),
            "owner" => cmp_text(&self.owner, &other.owner),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => Ordering::Equal,
        }
    }
}

impl CsvExportable for RiskEntry {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Title", "Category", "Likelihood", "Impact", "Score", "Level", "Owner", "Treatment", "Status", "Last Reviewed"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.category.as_str().to_string(),
            self.likelihood.to_string(),
            self.impact.to_string(),
            self.score().to_string(),
            self.level().as_str().to_string(),
            self.owner.clone(),
            self.treatment.as_str().to_string(),
            self.status.as_str().to_string(),
            self.last_reviewed.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a008_risk_register::risks;
    use crate::shared::record_filter::{filter_records, FilterCriteria};
    use crate::shared::record_sort::sort_records;

    #[test]
    fn test_score_and_level() {
        let mut risk = risks()[0].clone();
        risk.likelihood = 4;
        risk.impact = 5;
        assert_eq!(risk.score(), 20);
        assert_eq!(risk.level(), RiskLevel::Critical);

        risk.likelihood = 2;
        risk.impact = 2;
        assert_eq!(risk.level(), RiskLevel::Low);
    }

    #[test]
    fn test_score_clamps_out_of_range_inputs() {
        let mut risk = risks()[0].clone();
        risk.likelihood = 9;
        risk.impact = 0;
        assert_eq!(risk.score(), 5);
    }

    #[test]
    fn test_filter_by_derived_level() {
        let criteria = FilterCriteria::new().with_category(FILTER_LEVEL, "Critical");
        let result = filter_records(risks(), &criteria);
        assert!(!result.is_empty());
        assert!(result.iter().all(|r| r.score() >= 15));
    }

    #[test]
    fn test_sort_by_score_descending() {
        let mut rows = risks().to_vec();
        sort_records(&mut rows, "score", false);
        assert!(rows.windows(2).all(|w| w[0].score() >= w[1].score()));
    }

    #[test]
    fn test_search_fields() {
        for r in risks() {
            assert_eq!(
                r.search_fields(),
                vec![
                    r.title.as_str(),
                    r.owner.as_str(),
                    r.description.as_str(),
                ]
            );
        }
    }

    #[test]
    fn test_id_is_not_searchable() {
        let result = filter_records(risks(), &FilterCriteria::new().with_query("RSK-017"));
        assert!(result.is_empty());
    }
}
