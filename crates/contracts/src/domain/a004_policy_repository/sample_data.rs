use super::aggregate::{PolicyCategory, PolicyEntry, PolicyStatus};
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn policy(
    id: &str,
    code: &str,
    title: &str,
    category: PolicyCategory,
    version: &str,
    owner: &str,
    approver: &str,
    status: PolicyStatus,
    effective_date: &str,
    review_due: &str,
    acknowledgement_rate: u8,
) -> PolicyEntry {
    PolicyEntry {
        id: id.to_string(),
        code: code.to_string(),
        title: title.to_string(),
        category,
        version: version.to_string(),
        owner: owner.to_string(),
        approver: approver.to_string(),
        status,
        effective_date: effective_date.to_string(),
        review_due: review_due.to_string(),
        acknowledgement_rate,
    }
}

pub static POLICIES: Lazy<Vec<PolicyEntry>> = Lazy::new(|| {
    use PolicyCategory::*;
    use PolicyStatus::*;
    vec![
        policy("P-01", "POL-IS-001", "Information Security Policy", InformationSecurity, "5.0", "James O'Connor", "Board Risk Committee", Active, "2026-04-01", "2027-03-31", 94),
        policy("P-02", "POL-IS-004", "Access Control Policy", InformationSecurity, "3.2", "James O'Connor", "CISO", Active, "2026-10-16", "2027-10-15", 12),
        policy("P-03", "POL-IS-009", "Cryptography and Key Management Standard", InformationSecurity, "2.1", "Daniel Wu", "CISO", UnderReview, "2024-07-01", "2026-06-30", 81),
        policy("P-04", "POL-DP-001", "Personal Data Protection Policy", DataPrivacy, "2.0", "Priya Raman", "Data Protection Officer", Active, "2025-11-14", "2026-11-13", 88),
        policy("P-05", "POL-DP-003", "Data Retention and Disposal Schedule", DataPrivacy, "1.4", "Bob Smith", "General Counsel", Draft, "2026-12-01", "2027-11-30", 0),
        policy("P-06", "POL-HR-002", "Code of Conduct", HumanResources, "7.1", "Meera Iyer", "Board of Directors", Active, "2026-01-01", "2026-12-31", 97),
        policy("P-07", "POL-HR-006", "Prevention of Sexual Harassment Policy", HumanResources, "3.0", "Meera Iyer", "Board of Directors", Active, "2025-08-01", "2026-07-31", 91),
        policy("P-08", "POL-FN-003", "Related Party Transactions Policy", Finance, "4.0", "Alice Johnson", "Audit Committee", UnderReview, "2025-04-01", "2026-03-31", 76),
        policy("P-09", "POL-FN-007", "Anti-Money Laundering Policy", Finance, "6.2", "Priya Raman", "Board Risk Committee", Active, "2026-02-01", "2027-01-31", 89),
        policy("P-10", "POL-OP-002", "Business Continuity Management Policy", Operations, "3.3", "Karthik Nair", "COO", Active, "2025-12-15", "2026-12-14", 72),
        policy("P-11", "POL-OP-005", "Outsourcing and Third-Party Risk Policy", Operations, "2.0", "Daniel Wu", "Board Risk Committee", Draft, "2026-11-01", "2027-10-31", 0),
        policy("P-12", "POL-CP-001", "Insider Trading Prohibition Code", Compliance, "5.1", "Priya Raman", "Board of Directors", Active, "2025-10-01", "2026-09-30", 99),
        policy("P-13", "POL-CP-004", "Whistleblower Policy", Compliance, "2.2", "Sofia Martins", "Audit Committee", Active, "2026-05-01", "2027-04-30", 84),
        policy("P-14", "POL-IS-002", "Acceptable Use Policy (2019)", InformationSecurity, "1.0", "James O'Connor", "CISO", Archived, "2019-01-01", "2020-01-01", 100),
    ]
});

pub fn policies() -> &'static [PolicyEntry] {
    &POLICIES
}
