use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::ui::badge_of;
use crate::shared::date_utils::{format_date, reference_date};
use crate::shared::filterable_table::{chips_by, detail_grid, ColumnDef, FilterDef, FilterableTable};
use contracts::domain::a010_compliance_obligation::aggregate::{FILTER_COMPLIANCE, FILTER_FREQUENCY};
use contracts::domain::a010_compliance_obligation::{obligations, ComplianceObligation, ComplianceStatus};
use contracts::enums::Frequency;
use contracts::shared::status_tone::StatusTone;
use leptos::prelude::*;

const VIEW_KEY: &str = "a010_compliance_obligation";

type Col = ColumnDef<ComplianceObligation>;

fn columns() -> Vec<Col> {
    vec![
        Col::search("regulation", "Regulation", |o| o.regulation.clone()).width(180.0),
        Col::search("requirement", "Requirement", |o| o.requirement.clone()).width(260.0).unsorted(),
        Col::search("function", "Function", |o| o.function.clone()),
        Col::search("owner", "Owner", |o| o.owner.clone()),
        Col::badge("frequency", "Frequency", |o| badge_of(o.frequency)).unsorted(),
        Col::badge("compliance", "Compliance", |o| badge_of(o.compliance)),
        Col::custom("last_reviewed", "Last Reviewed", last_reviewed_cell),
    ]
}

fn last_reviewed_cell(obligation: &ComplianceObligation) -> AnyView {
    let date = format_date(&obligation.last_reviewed);
    if obligation.is_review_stale(reference_date()) {
        view! { <span class="text--warning" title="Review cycle missed">{date}</span> }.into_any()
    } else {
        date.into_any()
    }
}

fn obligation_id(obligation: &ComplianceObligation) -> String {
    obligation.id.clone()
}

fn compliance_chips(rows: &[ComplianceObligation]) -> Vec<(&'static str, usize, StatusTone)> {
    chips_by(rows, |o| o.compliance)
}

fn obligation_detail(obligation: &ComplianceObligation) -> AnyView {
    let cycle = obligation
        .review_interval_days()
        .map(|days| format!("every {} days", days))
        .unwrap_or_else(|| "on event".to_string());
    let attention = if obligation.needs_attention() {
        "Remediation required"
    } else {
        "No open actions"
    };
    detail_grid(vec![
        ("Requirement", obligation.requirement.clone()),
        ("Review cycle", cycle),
        ("Action", attention.to_string()),
    ])
}

/// Regulatory obligations mapped to owning functions
#[component]
pub fn ComplianceObligationList() -> impl IntoView {
    let filters = vec![
        FilterDef::of::<Frequency>(FILTER_FREQUENCY, "Frequency", "All frequencies"),
        FilterDef::of::<ComplianceStatus>(FILTER_COMPLIANCE, "Compliance", "All statuses"),
    ];

    view! {
        <FilterableTable
            view_key=VIEW_KEY
            title=tab_label_for_key(VIEW_KEY)
            records=obligations()
            columns=columns()
            filters=filters
            row_id=obligation_id
            detail=obligation_detail
            chips=compliance_chips
        />
    }
}
