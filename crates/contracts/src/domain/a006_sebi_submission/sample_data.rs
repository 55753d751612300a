use super::aggregate::{RegulatorySubmission, SubmissionStatus};
use crate::enums::Frequency;
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn submission(
    id: &str,
    reference: &str,
    title: &str,
    regulation: &str,
    authority: &str,
    frequency: Frequency,
    period: &str,
    due_date: &str,
    submitted_on: Option<&str>,
    status: SubmissionStatus,
    owner: &str,
) -> RegulatorySubmission {
    RegulatorySubmission {
        id: id.to_string(),
        reference: reference.to_string(),
        title: title.to_string(),
        regulation: regulation.to_string(),
        authority: authority.to_string(),
        frequency,
        period: period.to_string(),
        due_date: due_date.to_string(),
        submitted_on: submitted_on.map(str::to_string),
        status,
        owner: owner.to_string(),
    }
}

pub static SUBMISSIONS: Lazy<Vec<RegulatorySubmission>> = Lazy::new(|| {
    use Frequency::*;
    use SubmissionStatus::*;
    vec![
        submission("S-01", "SEBI-LODR-33-Q2", "Quarterly Financial Results", "SEBI LODR Reg. 33", "NSE / BSE", Quarterly, "Q2 FY27", "2026-11-14", None, Pending, "Alice Johnson"),
        submission("S-02", "SEBI-LODR-31-Q2", "Shareholding Pattern", "SEBI LODR Reg. 31", "NSE / BSE", Quarterly, "Q2 FY27", "2026-10-21", Some("2026-10-09"), Submitted, "Priya Raman"),
        submission("S-03", "SEBI-LODR-27-Q2", "Corporate Governance Report", "SEBI LODR Reg. 27(2)", "NSE / BSE", Quarterly, "Q2 FY27", "2026-10-21", None, Pending, "Priya Raman"),
        submission("S-04", "SEBI-LODR-13-Q2", "Investor Grievance Statement", "SEBI LODR Reg. 13(3)", "NSE / BSE", Quarterly, "Q2 FY27", "2026-10-21", Some("2026-10-14"), UnderReview, "Bob Smith"),
        submission("S-05", "SEBI-PIT-7-Q2", "Insider Trading Disclosures (Continual)", "SEBI PIT Reg. 7(2)", "NSE / BSE", EventBased, "Oct 2026", "2026-10-12", None, Overdue, "Rahul Mehta"),
        submission("S-06", "SEBI-LODR-24A-FY26", "Secretarial Compliance Report", "SEBI LODR Reg. 24A", "NSE / BSE", Annual, "FY26", "2026-05-30", Some("2026-05-28"), Submitted, "Priya Raman"),
        submission("S-07", "SEBI-LODR-34-FY26", "Annual Report", "SEBI LODR Reg. 34", "NSE / BSE", Annual, "FY26", "2026-08-21", Some("2026-08-25"), Submitted, "Alice Johnson"),
        submission("S-08", "SEBI-LODR-23-H1", "Related Party Transactions Disclosure", "SEBI LODR Reg. 23(9)", "NSE / BSE", HalfYearly, "H1 FY27", "2026-11-29", None, Pending, "Alice Johnson"),
        submission("S-09", "SEBI-LODR-30-EVT", "Material Event: Cyber Incident Disclosure", "SEBI LODR Reg. 30", "NSE / BSE", EventBased, "Oct 2026", "2026-10-15", None, Overdue, "Sofia Martins"),
        submission("S-10", "SEBI-CSCRF-Q2", "Cyber Security Compliance Report", "SEBI CSCRF", "SEBI", Quarterly, "Q2 FY27", "2026-10-31", None, Pending, "James O'Connor"),
        submission("S-11", "SEBI-LODR-32-Q1", "Statement of Deviation in Use of Proceeds", "SEBI LODR Reg. 32", "NSE / BSE", Quarterly, "Q1 FY27", "2026-08-14", Some("2026-08-20"), Rejected, "Alice Johnson"),
        submission("S-12", "SEBI-SAST-31-FY26", "Promoter Encumbrance Disclosure", "SEBI SAST Reg. 31(4)", "NSE / BSE", Annual, "FY26", "2026-04-07", Some("2026-04-03"), Submitted, "Rahul Mehta"),
        submission("S-13", "SEBI-LODR-40-M", "Share Transfer Compliance Certificate", "SEBI LODR Reg. 40(9)", "NSE / BSE", Monthly, "Sep 2026", "2026-10-20", None, Pending, "Bob Smith"),
    ]
});

pub fn submissions() -> &'static [RegulatorySubmission] {
    &SUBMISSIONS
}
