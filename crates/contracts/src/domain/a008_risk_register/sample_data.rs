use super::aggregate::{RiskCategory, RiskEntry, RiskStatus, Treatment};
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn risk(
    id: &str,
    title: &str,
    description: &str,
    category: RiskCategory,
    likelihood: u8,
    impact: u8,
    owner: &str,
    treatment: Treatment,
    status: RiskStatus,
    last_reviewed: &str,
) -> RiskEntry {
    RiskEntry {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category,
        likelihood,
        impact,
        owner: owner.to_string(),
        treatment,
        status,
        last_reviewed: last_reviewed.to_string(),
    }
}

pub static RISKS: Lazy<Vec<RiskEntry>> = Lazy::new(|| {
    use RiskCategory::*;
    use RiskStatus::*;
    use Treatment::*;
    vec![
        risk("RSK-001", "Ransomware on core systems", "Encryption of trading and settlement servers halts operations", Technology, 3, 5, "James O'Connor", Mitigate, Open, "2026-09-30"),
        risk("RSK-004", "Liquidity shortfall", "Intraday funding gap during market stress", Financial, 2, 5, "Alice Johnson", Mitigate, Monitoring, "2026-09-15"),
        risk("RSK-007", "Late regulatory filings", "Missed SEBI LODR deadlines lead to penalties and exchange action", Compliance, 3, 3, "Priya Raman", Mitigate, Open, "2026-10-01"),
        risk("RSK-009", "Key person dependency in treasury", "Single dealer holds knowledge of FX hedging book", Operational, 3, 2, "Rahul Mehta", Accept, Monitoring, "2026-08-20"),
        risk("RSK-012", "Cloud provider concentration", "Primary workloads hosted with one IaaS vendor", Technology, 2, 4, "Daniel Wu", Transfer, Open, "2026-09-10"),
        risk("RSK-014", "Insider trading by designated persons", "Trading on UPSI during closed window", Compliance, 2, 5, "Rahul Mehta", Mitigate, Monitoring, "2026-10-05"),
        risk("RSK-017", "Third-party outage", "Payment gateway downtime blocks customer collections", Operational, 4, 4, "Karthik Nair", Mitigate, Open, "2026-10-15"),
        risk("RSK-019", "Negative media on data misuse", "Customer data shared with analytics vendor without consent", Reputational, 2, 4, "Bob Smith", Mitigate, Open, "2026-07-28"),
        risk("RSK-021", "Market entry delay", "New product launch delayed by licensing requirements", Strategic, 3, 2, "Alice Johnson", Accept, Monitoring, "2026-06-30"),
        risk("RSK-023", "Legacy mainframe end of support", "Vendor support for settlement mainframe ends 2027", Technology, 5, 3, "Daniel Wu", Avoid, Open, "2026-09-01"),
        risk("RSK-026", "Bribery in vendor onboarding", "Procurement staff accepting inducements", Compliance, 1, 4, "Sofia Martins", Mitigate, Closed, "2026-05-12"),
        risk("RSK-028", "Office flood at DR site", "Monsoon flooding affects disaster recovery facility", Operational, 1, 3, "Karthik Nair", Transfer, Closed, "2026-04-18"),
    ]
});

pub fn risks() -> &'static [RiskEntry] {
    &RISKS
}
