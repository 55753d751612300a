use super::aggregate::{ComplianceObligation, ComplianceStatus};
use crate::enums::Frequency;
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn obligation(
    id: &str,
    regulation: &str,
    requirement: &str,
    function: &str,
    owner: &str,
    frequency: Frequency,
    compliance: ComplianceStatus,
    last_reviewed: &str,
) -> ComplianceObligation {
    ComplianceObligation {
        id: id.to_string(),
        regulation: regulation.to_string(),
        requirement: requirement.to_string(),
        function: function.to_string(),
        owner: owner.to_string(),
        frequency,
        compliance,
        last_reviewed: last_reviewed.to_string(),
    }
}

pub static OBLIGATIONS: Lazy<Vec<ComplianceObligation>> = Lazy::new(|| {
    use ComplianceStatus::*;
    use Frequency::*;
    vec![
        obligation("OBL-001", "SEBI CSCRF", "Maintain a board-approved cyber security and cyber resilience policy", "Information Security", "James O'Connor", Annual, Compliant, "2026-04-12"),
        obligation("OBL-002", "SEBI CSCRF", "Quarterly vulnerability assessment of critical systems", "Information Security", "Daniel Wu", Quarterly, PartiallyCompliant, "2026-07-20"),
        obligation("OBL-003", "SEBI LODR Reg. 30", "Disclose material events to exchanges within 24 hours", "Company Secretariat", "Kavya Reddy", EventBased, Compliant, "2026-09-30"),
        obligation("OBL-004", "PMLA 2002", "File suspicious transaction reports with FIU-IND", "Compliance", "Priya Raman", Monthly, Compliant, "2026-10-05"),
        obligation("OBL-005", "DPDP Act 2023", "Record of consent for personal data processing", "Legal", "Bob Smith", HalfYearly, NonCompliant, "2026-03-18"),
        obligation("OBL-006", "SEBI Stock Brokers Regs.", "Segregation of client funds and monthly reconciliation", "Finance", "Rahul Mehta", Monthly, Compliant, "2026-09-29"),
        obligation("OBL-007", "CERT-In Directions 2022", "Report cyber incidents within six hours", "Security Operations", "Ananya Kulkarni", EventBased, PartiallyCompliant, "2026-08-14"),
        obligation("OBL-008", "SEBI Outsourcing Guidelines", "Annual due diligence of material outsourcing vendors", "Vendor Management", "Karthik Nair", Annual, NotAssessed, "2025-09-01"),
        obligation("OBL-009", "SEBI Insider Trading Regs.", "Maintain structured digital database of UPSI sharing", "Company Secretariat", "Kavya Reddy", Quarterly, Compliant, "2026-09-12"),
        obligation("OBL-010", "ISO 27001:2022", "Internal ISMS audit of all Annex A controls", "Internal Audit", "Sofia Martins", Annual, PartiallyCompliant, "2025-11-22"),
        obligation("OBL-011", "SEBI Investor Grievance Circular", "Resolve SCORES complaints within 21 days", "Customer Service", "Meera Iyer", Monthly, NonCompliant, "2026-07-31"),
        obligation("OBL-012", "RBI KYC Master Direction", "Periodic KYC refresh for high-risk customers", "Operations", "Fatima Sheikh", HalfYearly, Compliant, "2026-06-30"),
    ]
});

pub fn obligations() -> &'static [ComplianceObligation] {
    &OBLIGATIONS
}
