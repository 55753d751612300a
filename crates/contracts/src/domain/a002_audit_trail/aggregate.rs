use crate::enums::Severity;
use crate::shared::category::CategoryValue;
use crate::shared::export::CsvExportable;
use crate::shared::record_filter::FilterableRecord;
use crate::shared::record_sort::{cmp_text, Sortable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const FILTER_MODULE: &str = "module";
pub const FILTER_SEVERITY: &str = "severity";

/// Change recorded by one of the GRC modules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditTrailEntry {
    pub id: String,
    pub timestamp: String,
    pub actor: String,
    pub module: String,
    pub event: String,
    pub entity_ref: String,
    pub severity: Severity,
    pub change_summary: String,
}

impl FilterableRecord for AuditTrailEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.actor, &self.event, &self.entity_ref, &self.change_summary]
    }

    fn category_value(&self, key: &str) -> Option<&str> {
        match key {
            FILTER_MODULE => Some(&self.module),
            FILTER_SEVERITY => Some(self.severity.as_str()),
            _ => None,
        }
    }
}

impl Sortable for AuditTrailEntry {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "timestamp" => self.timestamp.cmp(&other.timestamp),
            "actor" => cmp_text(&self.actor, &other.actor),
            "module" => cmp_text(&self.module, &other.module),
            "event" => cmp_text(&self.event, &other.event),
            "entity_ref" => self.entity_ref.cmp(&other.entity_ref),
            "severity" => (self.severity as u8).cmp(&(other.severity as u8)),
            _ => Ordering::Equal,
        }
    }
}

impl CsvExportable for AuditTrailEntry {
    fn headers() -> Vec<&'static str> {
        vec!["Timestamp", "Actor", "Module", "Event", "Entity", "Severity", "Change"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.actor.clone(),
            self.module.clone(),
            self.event.clone(),
            self.entity_ref.clone(),
            self.severity.as_str().to_string(),
            self.change_summary.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_audit_trail::audit_trail;
    use crate::shared::record_filter::{filter_records, FilterCriteria};
    use crate::shared::record_sort::sort_records;

    #[test]
    fn test_module_filter_is_exact() {
        let criteria = FilterCriteria::new().with_category(FILTER_MODULE, "Policy Management");
        let result = filter_records(audit_trail(), &criteria);
        assert!(!result.is_empty());
        assert!(result.iter().all(|e| e.module == "Policy Management"));

        let partial = FilterCriteria::new().with_category(FILTER_MODULE, "Policy");
        assert!(filter_records(audit_trail(), &partial).is_empty());
    }

    #[test]
    fn test_search_covers_change_summary() {
        let result = filter_records(audit_trail(), &FilterCriteria::new().with_query("mfa"));
        assert!(!result.is_empty());
    }

    #[test]
    fn test_sort_by_severity_puts_critical_last_ascending() {
        let mut rows = audit_trail().to_vec();
        sort_records(&mut rows, "severity", true);
        assert_eq!(rows.last().map(|e| e.severity), Some(Severity::Critical));
        assert_eq!(rows.first().map(|e| e.severity), Some(Severity::Info));
    }

    #[test]
    fn test_search_fields() {
        for r in audit_trail() {
            assert_eq!(
                r.search_fields(),
                vec![
                    r.actor.as_str(),
                    r.event.as_str(),
                    r.entity_ref.as_str(),
                    r.change_summary.as_str(),
                ]
            );
        }
    }
}
