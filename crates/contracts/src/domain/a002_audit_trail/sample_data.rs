use super::aggregate::AuditTrailEntry;
use crate::enums::Severity;
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    timestamp: &str,
    actor: &str,
    module: &str,
    event: &str,
    entity_ref: &str,
    severity: Severity,
    change_summary: &str,
) -> AuditTrailEntry {
    AuditTrailEntry {
        id: id.to_string(),
        timestamp: timestamp.to_string(),
        actor: actor.to_string(),
        module: module.to_string(),
        event: event.to_string(),
        entity_ref: entity_ref.to_string(),
        severity,
        change_summary: change_summary.to_string(),
    }
}

pub static AUDIT_TRAIL: Lazy<Vec<AuditTrailEntry>> = Lazy::new(|| {
    use Severity::*;
    vec![
        entry("AT-5001", "2026-10-16T10:04:12", "Priya Raman", "Policy Management", "Policy approved", "POL-IS-004", Medium, "Access Control Policy v3.2 approved by CISO"),
        entry("AT-5002", "2026-10-16T09:51:37", "James O'Connor", "Identity & Access", "Role assignment changed", "USR-0142", High, "Granted DBA role to contractor account for change CHG-8812"),
        entry("AT-5003", "2026-10-16T09:30:05", "System", "Identity & Access", "MFA enforcement disabled", "APP-PAYHUB", Critical, "MFA requirement removed for PayHub admin console"),
        entry("AT-5004", "2026-10-16T08:44:19", "Sofia Martins", "Audit Management", "Finding closed", "FND-2026-031", Low, "Segregation of duties finding closed after retest"),
        entry("AT-5005", "2026-10-15T18:10:56", "Karthik Nair", "Risk Register", "Risk rating updated", "RSK-017", Medium, "Likelihood raised from 2 to 4 after vendor outage"),
        entry("AT-5006", "2026-10-15T16:33:21", "Meera Iyer", "Training", "Session rescheduled", "TRN-2026-112", Info, "POSH awareness session moved to 2026-10-28"),
        entry("AT-5007", "2026-10-15T15:02:48", "Priya Raman", "Regulatory Filing", "Submission uploaded", "SEBI-LODR-33-Q2", Low, "Quarterly financial results uploaded to exchange portal"),
        entry("AT-5008", "2026-10-15T12:17:33", "Daniel Wu", "Vendor Management", "Vendor tier changed", "VND-0009", High, "Cloudnova moved from Tier 2 to Tier 1 critical"),
        entry("AT-5009", "2026-10-15T11:40:02", "System", "Identity & Access", "Dormant accounts disabled", "JOB-IAM-NIGHTLY", Info, "37 accounts disabled after 90 days inactivity"),
        entry("AT-5010", "2026-10-14T17:25:44", "Rahul Mehta", "Policy Management", "Exception granted", "EXC-2026-008", Medium, "Temporary exception to USB storage policy for treasury audit"),
        entry("AT-5011", "2026-10-14T14:09:30", "Sofia Martins", "Audit Management", "Audit plan amended", "AUD-PLAN-FY27", Low, "Added third-party risk review to Q3 plan"),
        entry("AT-5012", "2026-10-14T10:58:17", "James O'Connor", "Incident Management", "Incident escalated", "INC-2026-044", Critical, "Phishing incident escalated to CERT-In reporting"),
        entry("AT-5013", "2026-10-13T19:46:03", "Alice Johnson", "Risk Register", "Control linked", "RSK-004", Info, "Linked control CTL-FIN-07 to liquidity risk"),
        entry("AT-5014", "2026-10-13T09:12:55", "Bob Smith", "Vendor Management", "Contract uploaded", "VND-0014", Low, "Signed DPA uploaded for analytics vendor"),
    ]
});

pub fn audit_trail() -> &'static [AuditTrailEntry] {
    &AUDIT_TRAIL
}

/// Module names in first-appearance order, for the module dropdown
pub fn audit_modules() -> Vec<&'static str> {
    let mut modules: Vec<&'static str> = Vec::new();
    for entry in audit_trail() {
        if !modules.contains(&entry.module.as_str()) {
            modules.push(entry.module.as_str());
        }
    }
    modules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_modules_are_distinct() {
        let modules = audit_modules();
        assert_eq!(modules[0], "Policy Management");
        let mut sorted = modules.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), modules.len());
    }
}
