use super::aggregate::{ApprovalStatus, PolicyException};
use crate::enums::RiskLevel;
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn exception(
    id: &str,
    policy_code: &str,
    requested_by: &str,
    department: &str,
    justification: &str,
    compensating_control: &str,
    risk_level: RiskLevel,
    status: ApprovalStatus,
    requested_on: &str,
    expires_on: &str,
) -> PolicyException {
    PolicyException {
        id: id.to_string(),
        policy_code: policy_code.to_string(),
        requested_by: requested_by.to_string(),
        department: department.to_string(),
        justification: justification.to_string(),
        compensating_control: compensating_control.to_string(),
        risk_level,
        status,
        requested_on: requested_on.to_string(),
        expires_on: expires_on.to_string(),
    }
}

pub static POLICY_EXCEPTIONS: Lazy<Vec<PolicyException>> = Lazy::new(|| {
    use ApprovalStatus::*;
    use RiskLevel::*;
    vec![
        exception("EXC-031", "ISP-07", "Daniel Wu", "Technology", "Legacy settlement server cannot run the EDR agent until migration", "Network isolation and weekly log review", High, Approved, "2026-06-10", "2026-11-05"),
        exception("EXC-032", "ISP-12", "Rahul Mehta", "Treasury", "USB export needed for RBI reporting tool", "Encrypted company-issued drive only", Medium, Approved, "2026-07-02", "2027-01-02"),
        exception("EXC-033", "ACP-03", "Fatima Sheikh", "Operations", "Shared login for overnight batch operators", "Session recording and CCTV", High, Pending, "2026-10-08", "2027-04-08"),
        exception("EXC-034", "PWD-01", "Karthik Nair", "Vendor Management", "Vendor portal does not support MFA", "IP allow-listing", Critical, Rejected, "2026-09-15", "2026-12-15"),
        exception("EXC-035", "BYOD-02", "Kavya Reddy", "Company Secretariat", "Board members reading papers on personal tablets", "MDM container with remote wipe", Medium, Pending, "2026-10-12", "2027-03-31"),
        exception("EXC-036", "ISP-04", "Priya Raman", "Compliance", "Unpatched reporting VM required for regulator format", "No internet egress", High, Expired, "2026-01-20", "2026-07-20"),
        exception("EXC-037", "DLP-05", "Meera Iyer", "Human Resources", "Bulk payroll upload to bank portal", "Dual approval and checksum", Low, Approved, "2026-05-05", "2026-10-10"),
        exception("EXC-038", "CLD-02", "Bob Smith", "Legal", "E-discovery tool hosted outside India", "Contractual data residency clauses", Critical, Pending, "2026-10-14", "2027-01-14"),
        exception("EXC-039", "ISP-07", "Ananya Kulkarni", "Security Operations", "Honeypot hosts excluded from EDR", "Segmented VLAN and alerting", Low, Approved, "2026-08-22", "2027-08-22"),
        exception("EXC-040", "RET-01", "Sofia Martins", "Internal Audit", "Retain audit evidence beyond seven years", "Access restricted to audit team", Medium, Rejected, "2026-09-01", "2026-12-01"),
    ]
});

pub fn policy_exceptions() -> &'static [PolicyException] {
    &POLICY_EXCEPTIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dates::parse_date;

    #[test]
    fn test_expiry_after_request() {
        for e in policy_exceptions() {
            let requested = parse_date(&e.requested_on).expect("requested_on");
            let expires = parse_date(&e.expires_on).expect("expires_on");
            assert!(expires > requested, "{}", e.id);
        }
    }
}
