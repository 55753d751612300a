use crate::enums::Severity;
use crate::shared::category::CategoryValue;
use crate::shared::dates::parse_datetime;
use crate::shared::export::CsvExportable;
use crate::shared::record_filter::FilterableRecord;
use crate::shared::record_sort::{cmp_text, Sortable};
use crate::shared::status_tone::StatusTone;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const FILTER_TYPE: &str = "incident_type";
pub const FILTER_SEVERITY: &str = "severity";
pub const FILTER_STATUS: &str = "status";

/// CERT-In expects reportable cyber incidents within six hours
pub const REGULATOR_REPORTING_HOURS: i64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncidentType {
    DataBreach,
    Phishing,
    Malware,
    UnauthorizedAccess,
    PolicyViolation,
    ServiceOutage,
}

impl CategoryValue for IncidentType {
    fn all() -> &'static [Self] {
        &[
            IncidentType::DataBreach,
            IncidentType::Phishing,
            IncidentType::Malware,
            IncidentType::UnauthorizedAccess,
            IncidentType::PolicyViolation,
            IncidentType::ServiceOutage,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            IncidentType::DataBreach => "Data Breach",
            IncidentType::Phishing => "Phishing",
            IncidentType::Malware => "Malware",
            IncidentType::UnauthorizedAccess => "Unauthorized Access",
            IncidentType::PolicyViolation => "Policy Violation",
            IncidentType::ServiceOutage => "Service Outage",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            IncidentType::DataBreach | IncidentType::Malware => StatusTone::Error,
            IncidentType::PolicyViolation => StatusTone::Warning,
            _ => StatusTone::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncidentStatus {
    Open,
    Investigating,
    Contained,
    Resolved,
}

impl IncidentStatus {
    pub fn is_active(&self) -> bool {
        !matches!(self, IncidentStatus::Resolved)
    }
}

impl CategoryValue for IncidentStatus {
    fn all() -> &'static [Self] {
        &[
            IncidentStatus::Open,
            IncidentStatus::Investigating,
            IncidentStatus::Contained,
            IncidentStatus::Resolved,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "Open",
            IncidentStatus::Investigating => "Investigating",
            IncidentStatus::Contained => "Contained",
            IncidentStatus::Resolved => "Resolved",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            IncidentStatus::Open => StatusTone::Error,
            IncidentStatus::Investigating => StatusTone::Warning,
            IncidentStatus::Contained => StatusTone::Primary,
            IncidentStatus::Resolved => StatusTone::Success,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentEntry {
    pub id: String,
    pub title: String,
    pub reported_at: String,
    pub reporter: String,
    pub incident_type: IncidentType,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub assigned_to: String,
    pub affected_systems: String,
    pub regulator_notified_at: Option<String>,
}

impl IncidentEntry {
    /// High and critical breaches, malware and unauthorized access must be
    /// reported to the regulator
    pub fn is_reportable(&self) -> bool {
        matches!(self.severity, Severity::High | Severity::Critical)
            && matches!(
                self.incident_type,
                IncidentType::DataBreach | IncidentType::Malware | IncidentType::UnauthorizedAccess
            )
    }

    /// Hours between the report and the regulator notification
    pub fn hours_to_notification(&self) -> Option<i64> {
        let reported = parse_datetime(&self.reported_at)?;
        let notified = parse_datetime(self.regulator_notified_at.as_deref()?)?;
        Some((notified - reported).num_hours())
    }

    /// Reportable incident notified late or not at all
    pub fn breaches_reporting_window(&self) -> bool {
        self.is_reportable()
            && self
                .hours_to_notification()
                .map_or(true, |hours| hours > REGULATOR_REPORTING_HOURS)
    }
}

impl FilterableRecord for IncidentEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.reporter, &self.assigned_to, &self.affected_systems]
    }

    fn category_value(&self, key: &str) -> Option<&str> {
        match key {
            FILTER_TYPE => Some(self.incident_type.as_str()),
            FILTER_SEVERITY => Some(self.severity.as_str()),
            FILTER_STATUS => Some(self.status.as_str()),
            _ => None,
        }
    }
}

impl Sortable for IncidentEntry {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "reported_at" => self.reported_at.cmp(&other.reported_at),
            "title" => cmp_text(&self.title, &other.title),
            "severity" => (self.severity as u8).cmp(&(other.severity as u8)),
            "status" => (self.status as u8).cmp(&(other.status as u8)),
            "assigned_to" => cmp_text(&self.assigned_to, &other.assigned_to),
            _ => Ordering::Equal,
        }
    }
}

impl CsvExportable for IncidentEntry {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Title", "Reported At", "Reporter", "Type", "Severity", "Status", "Assigned To", "Affected Systems", "Regulator Notified"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.reported_at.clone(),
            self.reporter.clone(),
            self.incident_type.as_str().to_string(),
            self.severity.as_str().to_string(),
            self.status.as_str().to_string(),
            self.assigned_to.clone(),
            self.affected_systems.clone(),
            self.regulator_notified_at.clone().unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a009_incident_register::incidents;
    use crate::shared::record_filter::{filter_records, FilterCriteria};

    #[test]
    fn test_reporting_window() {
        let mut incident = incidents()[0].clone();
        incident.incident_type = IncidentType::DataBreach;
        incident.severity = Severity::Critical;
        incident.reported_at = "2026-10-14T10:00:00".to_string();
        incident.regulator_notified_at = Some("2026-10-14T15:30:00".to_string());
        assert_eq!(incident.hours_to_notification(), Some(5));
        assert!(!incident.breaches_reporting_window());

        incident.regulator_notified_at = Some("2026-10-14T18:00:00".to_string());
        assert!(incident.breaches_reporting_window());

        incident.regulator_notified_at = None;
        assert!(incident.breaches_reporting_window());

        incident.severity = Severity::Low;
        assert!(!incident.breaches_reporting_window());
    }

    #[test]
    fn test_search_affected_systems() {
        let result = filter_records(incidents(), &FilterCriteria::new().with_query("payhub"));
        assert!(!result.is_empty());
    }

    #[test]
    fn test_active_statuses() {
        assert!(IncidentStatus::Contained.is_active());
        assert!(!IncidentStatus::Resolved.is_active());
    }

    #[test]
    fn test_search_fields() {
        for r in incidents() {
            assert_eq!(
                r.search_fields(),
                vec![
                    r.title.as_str(),
                    r.reporter.as_str(),
                    r.assigned_to.as_str(),
                    r.affected_systems.as_str(),
                ]
            );
        }
    }

    #[test]
    fn test_id_is_not_searchable() {
        let result = filter_records(incidents(), &FilterCriteria::new().with_query("INC-2026-044"));
        assert!(result.is_empty());
    }
}
