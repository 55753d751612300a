use super::dto::{Breakdown, GrcOverview, OverviewCard};
use crate::domain::a003_vendor_risk::vendors;
use crate::domain::a004_policy_repository::{policies, PolicyStatus};
use crate::domain::a006_sebi_submission::submissions;
use crate::domain::a007_training_calendar::training_sessions;
use crate::domain::a008_risk_register::risks;
use crate::domain::a009_incident_register::incidents;
use crate::domain::a011_control_testing::control_tests;
use crate::domain::a012_policy_exception::{policy_exceptions, ApprovalStatus};
use crate::enums::RiskLevel;
use crate::shared::category::CategoryValue;
use crate::shared::status_tone::StatusTone;
use crate::shared::summary::{count_by, count_where};
use chrono::NaiveDate;

fn card(key: &str, title: &str, value: usize, out_of: usize, view_key: &str) -> OverviewCard {
    // Anything non-zero needs attention
    let tone = if value == 0 { StatusTone::Success } else { StatusTone::Warning };
    OverviewCard {
        key: key.to_string(),
        title: title.to_string(),
        value,
        out_of,
        tone,
        view_key: view_key.to_string(),
    }
}

fn breakdown<E: CategoryValue>(title: &str, counts: Vec<(E, usize)>) -> Breakdown {
    Breakdown {
        title: title.to_string(),
        buckets: counts
            .into_iter()
            .map(|(value, count)| (value.as_str().to_string(), count, value.tone()))
            .collect(),
    }
}

/// Headline counts across every register, as of `today`
pub fn build_overview(today: NaiveDate) -> GrcOverview {
    let open_incidents = incidents().iter().filter(|i| i.status.is_active()).count();
    let overdue_submissions = submissions().iter().filter(|s| s.is_overdue(today)).count();
    let elevated_risks = risks().iter().filter(|r| r.level().is_elevated()).count();
    let elevated_vendors = count_where(vendors(), |v| v.risk_level, &[RiskLevel::High, RiskLevel::Critical]);
    let policies_in_progress = count_where(
        policies(),
        |p| p.status,
        &[PolicyStatus::Draft, PolicyStatus::UnderReview],
    );
    let upcoming_training = training_sessions().iter().filter(|t| t.is_upcoming(today)).count();
    let failed_controls = control_tests().iter().filter(|t| t.result.is_failure()).count();
    let pending_exceptions = count_where(policy_exceptions(), |e| e.status, &[ApprovalStatus::Pending]);

    let mut cards = vec![
        card("open_incidents", "Open incidents", open_incidents, incidents().len(), "a009_incident_register"),
        card("overdue_submissions", "Overdue SEBI submissions", overdue_submissions, submissions().len(), "a006_sebi_submission"),
        card("elevated_risks", "Critical / high risks", elevated_risks, risks().len(), "a008_risk_register"),
        card("elevated_vendors", "High / critical vendors", elevated_vendors, vendors().len(), "a003_vendor_risk"),
        card("policies_in_progress", "Policies in draft or review", policies_in_progress, policies().len(), "a004_policy_repository"),
        card("upcoming_training", "Upcoming training sessions", upcoming_training, training_sessions().len(), "a007_training_calendar"),
        card("failed_controls", "Failed control tests", failed_controls, control_tests().len(), "a011_control_testing"),
        card("pending_exceptions", "Pending policy exceptions", pending_exceptions, policy_exceptions().len(), "a012_policy_exception"),
    ];
    // Upcoming sessions are informational
    if let Some(training) = cards.iter_mut().find(|c| c.key == "upcoming_training") {
        training.tone = StatusTone::Primary;
    }
    for key in ["open_incidents", "overdue_submissions"] {
        if let Some(c) = cards.iter_mut().find(|c| c.key == key && c.value > 0) {
            c.tone = StatusTone::Error;
        }
    }

    let breakdowns = vec![
        breakdown("Incidents by status", count_by(incidents(), |i| i.status)),
        breakdown("Risks by level", count_by(risks(), |r| r.level())),
        breakdown("Vendors by risk level", count_by(vendors(), |v| v.risk_level)),
    ];

    log::debug!("overview built for {}: {} cards", today, cards.len());

    GrcOverview {
        as_of: today.format("%Y-%m-%d").to_string(),
        cards,
        breakdowns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a009_incident_register::IncidentStatus;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_every_card_present_and_bounded() {
        let overview = build_overview(today());
        assert_eq!(overview.cards.len(), 8);
        assert_eq!(overview.as_of, "2026-10-16");
        for c in &overview.cards {
            assert!(c.value <= c.out_of, "{}", c.key);
        }
    }

    #[test]
    fn test_open_incidents_exclude_resolved() {
        let overview = build_overview(today());
        let expected = incidents()
            .iter()
            .filter(|i| i.status != IncidentStatus::Resolved)
            .count();
        assert_eq!(overview.card("open_incidents").map(|c| c.value), Some(expected));
    }

    #[test]
    fn test_breakdowns_cover_every_record() {
        let overview = build_overview(today());
        let incidents_total: usize = overview.breakdowns[0].buckets.iter().map(|b| b.1).sum();
        assert_eq!(incidents_total, incidents().len());
        let risks_total: usize = overview.breakdowns[1].buckets.iter().map(|b| b.1).sum();
        assert_eq!(risks_total, risks().len());
    }

    #[test]
    fn test_card_drills_into_view() {
        let overview = build_overview(today());
        assert_eq!(
            overview.card("failed_controls").map(|c| c.view_key.as_str()),
            Some("a011_control_testing")
        );
        assert!(overview.card("unknown").is_none());
    }
}
