use super::aggregate::{Shift, ShiftLogEntry, ShiftStatus};
use crate::enums::Priority;
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn shift_entry(
    id: &str,
    shift_date: &str,
    shift: Shift,
    analyst: &str,
    alerts_triaged: u32,
    false_positives: u32,
    incidents_escalated: u32,
    priority: Priority,
    status: ShiftStatus,
    summary: &str,
    handover_notes: &str,
) -> ShiftLogEntry {
    ShiftLogEntry {
        id: id.to_string(),
        shift_date: shift_date.to_string(),
        shift,
        analyst: analyst.to_string(),
        alerts_triaged,
        false_positives,
        incidents_escalated,
        priority,
        status,
        summary: summary.to_string(),
        handover_notes: handover_notes.to_string(),
    }
}

pub static SHIFT_LOG: Lazy<Vec<ShiftLogEntry>> = Lazy::new(|| {
    use Priority::*;
    use Shift::*;
    use ShiftStatus::*;
    vec![
        shift_entry("SOC-2026-1016-M", "2026-10-16", Morning, "Ananya Kulkarni", 58, 41, 1, High, Open,
            "Credential stuffing attempts against customer portal from rotating proxies.",
            "WAF rate limit lowered to 30 req/min; monitor for false blocks from mobile app."),
        shift_entry("SOC-2026-1015-N", "2026-10-15", Night, "Vikram Desai", 34, 29, 0, Low, HandedOver,
            "Quiet shift; patch window for Windows servers completed.",
            "Two servers pending reboot: FIN-APP-02, HR-DB-01. Confirm with infra at 09:00."),
        shift_entry("SOC-2026-1015-E", "2026-10-15", Evening, "Ananya Kulkarni", 71, 44, 2, Critical, Closed,
            "Phishing campaign impersonating CFO; 14 users clicked, 2 entered credentials.",
            "Passwords reset and sessions revoked for both users; INC-2026-044 raised."),
        shift_entry("SOC-2026-1015-M", "2026-10-15", Morning, "Rohan Gupta", 49, 38, 0, Medium, Closed,
            "Spike in DLP alerts after finance month-end uploads.",
            "Tuned DLP rule FIN-07 to exclude approved SFTP destination."),
        shift_entry("SOC-2026-1014-N", "2026-10-14", Night, "Vikram Desai", 27, 20, 1, High, HandedOver,
            "EDR flagged PowerShell download cradle on dev workstation DEV-LT-118.",
            "Host isolated via EDR; forensic image requested. Owner informed by email."),
        shift_entry("SOC-2026-1014-E", "2026-10-14", Evening, "Fatima Sheikh", 62, 51, 0, Low, Closed,
            "Vulnerability scanner noise from quarterly external scan.",
            "Scanner IPs added to SIEM suppression list until 2026-10-18."),
        shift_entry("SOC-2026-1014-M", "2026-10-14", Morning, "Rohan Gupta", 55, 37, 1, Medium, Closed,
            "Impossible travel alert for treasury dealer logging in from Singapore.",
            "Confirmed business travel with manager; conditional access exception expires Friday."),
        shift_entry("SOC-2026-1013-N", "2026-10-13", Night, "Fatima Sheikh", 19, 15, 0, Low, Closed,
            "Backup job failures on NAS-02 caused alert storm.",
            "Storage team fixed credentials; no security impact."),
        shift_entry("SOC-2026-1013-E", "2026-10-13", Evening, "Ananya Kulkarni", 66, 40, 3, Critical, Closed,
            "Ransomware precursor (Cobalt Strike beacon) detected on branch file server.",
            "Server rebuilt from clean image; IOC sweep across branches found no further hits."),
        shift_entry("SOC-2026-1013-M", "2026-10-13", Morning, "Vikram Desai", 44, 39, 0, Low, Closed,
            "Routine monitoring; certificate expiry warnings for internal portals.",
            "Renewal tickets logged with PKI team for three certificates."),
    ]
});

pub fn shift_log() -> &'static [ShiftLogEntry] {
    &SHIFT_LOG
}
