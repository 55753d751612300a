use super::aggregate::{AssessmentStatus, VendorCategory, VendorRiskEntry};
use crate::enums::RiskLevel;
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn vendor(
    id: &str,
    vendor_name: &str,
    services: &str,
    category: VendorCategory,
    risk_level: RiskLevel,
    risk_score: u8,
    assessment_status: AssessmentStatus,
    last_assessed: &str,
    next_review: &str,
    owner: &str,
    contract_value: f64,
    handles_personal_data: bool,
) -> VendorRiskEntry {
    VendorRiskEntry {
        id: id.to_string(),
        vendor_name: vendor_name.to_string(),
        services: services.to_string(),
        category,
        risk_level,
        risk_score,
        assessment_status,
        last_assessed: last_assessed.to_string(),
        next_review: next_review.to_string(),
        owner: owner.to_string(),
        contract_value,
        handles_personal_data,
    }
}

pub static VENDORS: Lazy<Vec<VendorRiskEntry>> = Lazy::new(|| {
    use AssessmentStatus::*;
    use RiskLevel::*;
    use VendorCategory::*;
    vec![
        vendor("VND-0009", "Cloudnova Infrastructure", "Primary IaaS hosting for trading platform", CloudHosting, Critical, 86, InProgress, "2025-10-20", "2026-10-20", "Daniel Wu", 420.0, true),
        vendor("VND-0002", "Razorlink Payments", "Payment gateway and UPI collections", Payments, High, 72, Completed, "2026-06-12", "2027-06-12", "Rahul Mehta", 180.5, true),
        vendor("VND-0014", "InsightGrid Analytics", "Customer analytics and data warehouse", DataAnalytics, High, 68, Pending, "2025-09-30", "2026-09-30", "Alice Johnson", 95.0, true),
        vendor("VND-0021", "Kestrel Advisory", "Regulatory advisory and filing support", Consulting, Medium, 45, Completed, "2026-03-18", "2027-03-18", "Priya Raman", 38.0, false),
        vendor("VND-0005", "SecureStack Hosting", "Disaster recovery site hosting", CloudHosting, High, 64, Overdue, "2025-07-01", "2026-07-01", "Daniel Wu", 140.0, true),
        vendor("VND-0031", "Metro Facility Services", "Housekeeping and physical security", Facilities, Low, 22, Completed, "2026-01-09", "2027-01-09", "Karthik Nair", 24.0, false),
        vendor("VND-0017", "Bharat Telelinks", "MPLS links between branches", Telecom, Medium, 51, InProgress, "2025-11-02", "2026-11-02", "James O'Connor", 61.0, false),
        vendor("VND-0026", "PeopleFirst Payroll", "Outsourced payroll processing", Payments, Critical, 81, Overdue, "2025-08-15", "2026-08-15", "Meera Iyer", 55.0, true),
        vendor("VND-0033", "ClearView Consulting", "Internal audit co-sourcing", Consulting, Low, 30, Pending, "2025-12-01", "2026-12-01", "Sofia Martins", 42.0, false),
        vendor("VND-0011", "Nimbus Mail Relay", "Transactional email delivery", CloudHosting, Medium, 47, Completed, "2026-05-22", "2027-05-22", "James O'Connor", 12.5, true),
        vendor("VND-0038", "Archway Records Storage", "Offsite physical records archive", Facilities, Medium, 43, Overdue, "2025-06-30", "2026-06-30", "Bob Smith", 9.0, true),
        vendor("VND-0040", "SignalPath Networks", "Internet leased lines and DDoS scrubbing", Telecom, High, 66, Completed, "2026-02-14", "2027-02-14", "James O'Connor", 73.0, false),
    ]
});

pub fn vendors() -> &'static [VendorRiskEntry] {
    &VENDORS
}
