use crate::shared::category::CategoryValue;
use crate::shared::export::CsvExportable;
use crate::shared::record_filter::FilterableRecord;
use crate::shared::record_sort::{cmp_text, Sortable};
use crate::shared::status_tone::StatusTone;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const FILTER_FRAMEWORK: &str = "framework";
pub const FILTER_RESULT: &str = "result";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Framework {
    Iso27001,
    Soc2,
    PciDss,
    NistCsf,
    Internal,
}

impl CategoryValue for Framework {
    fn all() -> &'static [Self] {
        &[
            Framework::Iso27001,
            Framework::Soc2,
            Framework::PciDss,
            Framework::NistCsf,
            Framework::Internal,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Framework::Iso27001 => "ISO 27001",
            Framework::Soc2 => "SOC 2",
            Framework::PciDss => "PCI DSS",
            Framework::NistCsf => "NIST CSF",
            Framework::Internal => "Internal",
        }
    }

    fn tone(&self) -> StatusTone {
        StatusTone::Primary
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestResult {
    Effective,
    PartiallyEffective,
    Ineffective,
    NotTested,
}

impl TestResult {
    pub fn is_failure(&self) -> bool {
        matches!(self, TestResult::Ineffective | TestResult::PartiallyEffective)
    }
}

impl CategoryValue for TestResult {
    fn all() -> &'static [Self] {
        &[
            TestResult::Effective,
            TestResult::PartiallyEffective,
            TestResult::Ineffective,
            TestResult::NotTested,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            TestResult::Effective => "Effective",
            TestResult::PartiallyEffective => "Partially Effective",
            TestResult::Ineffective => "Ineffective",
            TestResult::NotTested => "Not Tested",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            TestResult::Effective => StatusTone::Success,
            TestResult::PartiallyEffective => StatusTone::Warning,
            TestResult::Ineffective => StatusTone::Error,
            TestResult::NotTested => StatusTone::Neutral,
        }
    }
}

/// Result of one control design/operating effectiveness test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlTest {
    pub id: String,
    pub control_ref: String,
    pub control_name: String,
    pub framework: Framework,
    pub tester: String,
    pub test_date: String,
    pub sample_size: u32,
    pub exceptions_found: u32,
    pub result: TestResult,
    pub evidence_count: u32,
}

impl ControlTest {
    /// Share of sampled items that failed, in percent
    pub fn exception_rate(&self) -> f64 {
        if self.sample_size == 0 {
            0.0
        } else {
            self.exceptions_found as f64 * 100.0 / self.sample_size as f64
        }
    }

    pub fn lacks_evidence(&self) -> bool {
        self.result != TestResult::NotTested && self.evidence_count == 0
    }
}

impl FilterableRecord for ControlTest {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.control_ref, &self.control_name, &self.tester]
    }

    fn category_value(&self, key: &str) -> Option<&str> {
        match key {
            FILTER_FRAMEWORK => Some(self.framework.as_str()),
            FILTER_RESULT => Some(self.result.as_str()),
            _ => None,
        }
    }
}

impl Sortable for ControlTest {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "control_ref" => self.control_ref.cmp(&other.control_ref),
            "control_name" => cmp_text(&self.control_name, &other.control_name),
            "tester" => cmp_text(&self.tester, &other.tester),
            "test_date" => self.test_date.cmp(&other.test_date),
            "exception_rate" => self.exception_rate().total_cmp(&other.exception_rate()),
            "evidence_count" => self.evidence_count.cmp(&other.evidence_count),
            _ => Ordering::Equal,
        }
    }
}

impl CsvExportable for ControlTest {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Control", "Name", "Framework", "Tester", "Test Date", "Sample Size", "Exceptions", "Result", "Evidence"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.control_ref.clone(),
            self.control_name.clone(),
            self.framework.as_str().to_string(),
            self.tester.clone(),
            self.test_date.clone(),
            self.sample_size.to_string(),
            self.exceptions_found.to_string(),
            self.result.as_str().to_string(),
            self.evidence_count.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a011_control_testing::control_tests;
    use crate::shared::record_filter::{filter_records, FilterCriteria};

    #[test]
    fn test_exception_rate() {
        let mut test = control_tests()[0].clone();
        test.sample_size = 40;
        test.exceptions_found = 3;
        assert!((test.exception_rate() - 7.5).abs() < f64::EPSILON);

        test.sample_size = 0;
        assert_eq!(test.exception_rate(), 0.0);
    }

    #[test]
    fn test_framework_filter_uses_display_value() {
        let criteria = FilterCriteria::new().with_category(FILTER_FRAMEWORK, "PCI DSS");
        let result = filter_records(control_tests(), &criteria);
        assert!(!result.is_empty());
        assert!(result.iter().all(|t| t.framework == Framework::PciDss));
    }

    #[test]
    fn test_failures() {
        assert!(TestResult::Ineffective.is_failure());
        assert!(!TestResult::NotTested.is_failure());
    }

    #[test]
    fn test_search_fields() {
        for r in control_tests() {
            assert_eq!(
                r.search_fields(),
                vec![
                    r.control_ref.as_str(),
                    r.control_name.as_str(),
                    r.tester.as_str(),
                ]
            );
        }
    }
}
