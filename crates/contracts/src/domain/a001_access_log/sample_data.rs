use super::aggregate::{AccessAction, AccessLogEntry, AccessOutcome};
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    timestamp: &str,
    user: &str,
    department: &str,
    document: &str,
    classification: &str,
    action: AccessAction,
    ip_address: &str,
    outcome: AccessOutcome,
) -> AccessLogEntry {
    AccessLogEntry {
        id: id.to_string(),
        timestamp: timestamp.to_string(),
        user: user.to_string(),
        department: department.to_string(),
        document: document.to_string(),
        classification: classification.to_string(),
        action,
        ip_address: ip_address.to_string(),
        outcome,
    }
}

pub static ACCESS_LOG: Lazy<Vec<AccessLogEntry>> = Lazy::new(|| {
    use AccessAction::*;
    use AccessOutcome::*;
    vec![
        entry("AL-1001", "2026-10-16T09:12:44", "Alice Johnson", "Finance", "Q2 FY27 Board Pack.pdf", "Confidential", Downloaded, "10.0.4.21", Granted),
        entry("AL-1002", "2026-10-16T09:05:10", "Bob Smith", "Legal", "Vendor Master Agreement - Cloudnova.docx", "Confidential", Viewed, "10.0.7.14", Granted),
        entry("AL-1003", "2026-10-16T08:58:31", "Priya Raman", "Compliance", "SEBI LODR Reg 33 Filing Draft.xlsx", "Restricted", Edited, "10.0.4.35", Granted),
        entry("AL-1004", "2026-10-16T08:47:02", "Rahul Mehta", "Treasury", "Insider Trading Window Register.xlsx", "Restricted", Downloaded, "192.168.12.40", Denied),
        entry("AL-1005", "2026-10-16T08:31:19", "Alice Johnson", "Finance", "Payroll Extract September.csv", "Restricted", Downloaded, "10.0.4.21", Flagged),
        entry("AL-1006", "2026-10-15T18:22:55", "Meera Iyer", "Human Resources", "Employee Handbook 2026.pdf", "Internal", Printed, "10.0.9.8", Granted),
        entry("AL-1007", "2026-10-15T17:40:12", "James O'Connor", "Information Security", "Firewall Rule Review Q3.xlsx", "Confidential", Shared, "10.0.2.17", Granted),
        entry("AL-1008", "2026-10-15T16:03:48", "Karthik Nair", "Operations", "Business Continuity Plan v4.docx", "Internal", Viewed, "10.0.5.63", Granted),
        entry("AL-1009", "2026-10-15T15:11:27", "Unknown Service Account", "Information Security", "Privileged Access Matrix.xlsx", "Restricted", Viewed, "203.0.113.77", Denied),
        entry("AL-1010", "2026-10-15T14:56:09", "Sofia Martins", "Internal Audit", "Audit Committee Minutes Aug.pdf", "Confidential", Downloaded, "10.0.6.12", Granted),
        entry("AL-1011", "2026-10-15T13:20:33", "Bob Smith", "Legal", "Litigation Hold Notice - Project Kite.pdf", "Restricted", Deleted, "10.0.7.14", Denied),
        entry("AL-1012", "2026-10-15T11:45:50", "Priya Raman", "Compliance", "AML Transaction Monitoring Rules.docx", "Confidential", Edited, "10.0.4.35", Granted),
        entry("AL-1013", "2026-10-15T10:02:05", "Daniel Wu", "Technology", "Production DB Credentials Vault Export", "Restricted", Downloaded, "10.0.3.90", Flagged),
        entry("AL-1014", "2026-10-14T19:37:41", "Meera Iyer", "Human Resources", "Disciplinary Case 2026-14.pdf", "Restricted", Viewed, "10.0.9.8", Granted),
        entry("AL-1015", "2026-10-14T16:28:16", "Rahul Mehta", "Treasury", "FX Hedging Policy.pdf", "Internal", Viewed, "10.0.4.52", Granted),
        entry("AL-1016", "2026-10-14T09:15:00", "Sofia Martins", "Internal Audit", "Vendor Due Diligence Tracker.xlsx", "Confidential", Shared, "10.0.6.12", Flagged),
    ]
});

pub fn access_log() -> &'static [AccessLogEntry] {
    &ACCESS_LOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dates::parse_datetime;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = access_log().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), access_log().len());
    }

    #[test]
    fn test_timestamps_parse() {
        assert!(access_log().iter().all(|e| parse_datetime(&e.timestamp).is_some()));
    }
}
