use super::aggregate::{ControlTest, Framework, TestResult};
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn control_test(
    id: &str,
    control_ref: &str,
    control_name: &str,
    framework: Framework,
    tester: &str,
    test_date: &str,
    sample_size: u32,
    exceptions_found: u32,
    result: TestResult,
    evidence_count: u32,
) -> ControlTest {
    ControlTest {
        id: id.to_string(),
        control_ref: control_ref.to_string(),
        control_name: control_name.to_string(),
        framework,
        tester: tester.to_string(),
        test_date: test_date.to_string(),
        sample_size,
        exceptions_found,
        result,
        evidence_count,
    }
}

pub static CONTROL_TESTS: Lazy<Vec<ControlTest>> = Lazy::new(|| {
    use Framework::*;
    use TestResult::*;
    vec![
        control_test("CT-101", "A.5.15", "Access control policy enforcement", Iso27001, "Sofia Martins", "2026-09-02", 25, 0, Effective, 6),
        control_test("CT-102", "A.8.8", "Technical vulnerability management", Iso27001, "Sofia Martins", "2026-09-04", 30, 4, PartiallyEffective, 5),
        control_test("CT-103", "CC6.1", "Logical access provisioning approvals", Soc2, "Arjun Desai", "2026-09-09", 40, 0, Effective, 8),
        control_test("CT-104", "CC7.2", "Security event monitoring and alerting", Soc2, "Arjun Desai", "2026-09-11", 20, 5, Ineffective, 3),
        control_test("CT-105", "Req. 3.4", "Cardholder data rendered unreadable", PciDss, "Lakshmi Menon", "2026-09-15", 15, 0, Effective, 4),
        control_test("CT-106", "Req. 10.2", "Audit log capture for CDE systems", PciDss, "Lakshmi Menon", "2026-09-17", 15, 2, PartiallyEffective, 2),
        control_test("CT-107", "PR.AC-1", "Identity lifecycle management", NistCsf, "Arjun Desai", "2026-09-22", 35, 1, Effective, 7),
        control_test("CT-108", "DE.CM-8", "Vulnerability scans performed", NistCsf, "Sofia Martins", "2026-09-24", 12, 0, Effective, 0),
        control_test("CT-109", "INT-FIN-04", "Maker-checker on payment release", Internal, "Lakshmi Menon", "2026-10-01", 50, 6, Ineffective, 9),
        control_test("CT-110", "INT-HR-02", "Leaver access revocation within 24h", Internal, "Arjun Desai", "2026-10-06", 18, 0, Effective, 3),
        control_test("CT-111", "A.5.30", "ICT readiness for business continuity", Iso27001, "Sofia Martins", "2026-11-12", 0, 0, NotTested, 0),
        control_test("CT-112", "CC9.2", "Vendor risk management", Soc2, "Arjun Desai", "2026-11-20", 0, 0, NotTested, 0),
    ]
});

pub fn control_tests() -> &'static [ControlTest] {
    &CONTROL_TESTS
}
