use super::aggregate::{IncidentEntry, IncidentStatus, IncidentType};
use crate::enums::Severity;
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn incident(
    id: &str,
    title: &str,
    reported_at: &str,
    reporter: &str,
    incident_type: IncidentType,
    severity: Severity,
    status: IncidentStatus,
    assigned_to: &str,
    affected_systems: &str,
    regulator_notified_at: Option<&str>,
) -> IncidentEntry {
    IncidentEntry {
        id: id.to_string(),
        title: title.to_string(),
        reported_at: reported_at.to_string(),
        reporter: reporter.to_string(),
        incident_type,
        severity,
        status,
        assigned_to: assigned_to.to_string(),
        affected_systems: affected_systems.to_string(),
        regulator_notified_at: regulator_notified_at.map(str::to_string),
    }
}

pub static INCIDENTS: Lazy<Vec<IncidentEntry>> = Lazy::new(|| {
    use IncidentStatus::*;
    use IncidentType::*;
    use Severity::*;
    vec![
        incident("INC-2026-044", "CFO impersonation phishing campaign", "2026-10-15T17:12:00", "Ananya Kulkarni", Phishing, High, Contained, "James O'Connor", "Email, Azure AD", None),
        incident("INC-2026-043", "Cobalt Strike beacon on branch file server", "2026-10-13T19:05:00", "Ananya Kulkarni", Malware, Critical, Resolved, "Daniel Wu", "BR-PUNE-FS01", Some("2026-10-13T23:40:00")),
        incident("INC-2026-042", "PayHub admin console MFA disabled", "2026-10-16T09:35:00", "System", UnauthorizedAccess, Critical, Investigating, "James O'Connor", "PayHub", None),
        incident("INC-2026-041", "Customer statements emailed to wrong recipients", "2026-10-11T11:20:00", "Meera Iyer", DataBreach, High, Investigating, "Bob Smith", "Statement Mailer", Some("2026-10-11T20:10:00")),
        incident("INC-2026-040", "Payment gateway outage", "2026-10-10T08:02:00", "Karthik Nair", ServiceOutage, High, Resolved, "Karthik Nair", "Razorlink Gateway, Collections", None),
        incident("INC-2026-039", "USB storage used on treasury workstation", "2026-10-09T15:44:00", "DLP Agent", PolicyViolation, Medium, Resolved, "Sofia Martins", "TRS-WS-07", None),
        incident("INC-2026-038", "Dormant contractor account reactivated", "2026-10-07T13:30:00", "Rohan Gupta", UnauthorizedAccess, Medium, Contained, "James O'Connor", "Active Directory", None),
        incident("INC-2026-037", "Malicious macro attachment opened", "2026-10-04T10:18:00", "Fatima Sheikh", Malware, Low, Resolved, "Daniel Wu", "HR-LT-022", None),
        incident("INC-2026-036", "Shared drive exposed to all staff", "2026-10-02T16:50:00", "Sofia Martins", DataBreach, Medium, Open, "Bob Smith", "SharePoint Legal", None),
        incident("INC-2026-035", "Clean desk violation in dealing room", "2026-09-29T18:00:00", "Rahul Mehta", PolicyViolation, Low, Open, "Meera Iyer", "Dealing Room", None),
        incident("INC-2026-034", "Card data found in support tickets", "2026-09-25T09:40:00", "Priya Raman", DataBreach, Critical, Resolved, "Bob Smith", "Helpdesk", Some("2026-09-25T14:05:00")),
    ]
});

pub fn incidents() -> &'static [IncidentEntry] {
    &INCIDENTS
}
