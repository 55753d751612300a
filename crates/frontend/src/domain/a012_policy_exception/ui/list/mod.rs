use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::ui::badge_of;
use crate::shared::date_utils::{format_date, reference_date};
use crate::shared::filterable_table::{chips_by, detail_grid, ColumnDef, FilterDef, FilterableTable};
use contracts::domain::a012_policy_exception::aggregate::{FILTER_RISK_LEVEL, FILTER_STATUS};
use contracts::domain::a012_policy_exception::{policy_exceptions, ApprovalStatus, PolicyException};
use contracts::enums::RiskLevel;
use contracts::shared::status_tone::StatusTone;
use leptos::prelude::*;

const VIEW_KEY: &str = "a012_policy_exception";

type Col = ColumnDef<PolicyException>;

fn columns() -> Vec<Col> {
    vec![
        Col::text("id", "ID", |e| e.id.clone()).width(90.0),
        Col::search("policy_code", "Policy", |e| e.policy_code.clone()).width(100.0),
        Col::search("requested_by", "Requested By", |e| e.requested_by.clone()),
        Col::search("department", "Department", |e| e.department.clone()),
        Col::badge("risk_level", "Risk", |e| badge_of(e.risk_level)).width(100.0),
        Col::badge("status", "Status", |e| badge_of(e.status)).unsorted(),
        Col::text("requested_on", "Requested", |e| format_date(&e.requested_on)).width(100.0),
        Col::custom("expires_on", "Expires", expiry_cell).width(100.0),
    ]
}

fn expiry_cell(exception: &PolicyException) -> AnyView {
    let today = reference_date();
    let date = format_date(&exception.expires_on);
    if exception.is_expired(today) {
        view! { <span class="text--error" title="Expired">{date}</span> }.into_any()
    } else if exception.expires_soon(today) {
        view! { <span class="text--warning" title="Expires soon">{date}</span> }.into_any()
    } else {
        date.into_any()
    }
}

fn exception_id(exception: &PolicyException) -> String {
    exception.id.clone()
}

fn status_chips(rows: &[PolicyException]) -> Vec<(&'static str, usize, StatusTone)> {
    chips_by(rows, |e| e.status)
}

fn exception_detail(exception: &PolicyException) -> AnyView {
    detail_grid(vec![
        ("Justification", exception.justification.clone()),
        ("Compensating control", exception.compensating_control.clone()),
    ])
}

/// Approved and pending deviations from policy
#[component]
pub fn PolicyExceptionList() -> impl IntoView {
    let filters = vec![
        FilterDef::of::<RiskLevel>(FILTER_RISK_LEVEL, "Risk level", "All levels"),
        FilterDef::of::<ApprovalStatus>(FILTER_STATUS, "Status", "All statuses"),
    ];

    view! {
        <FilterableTable
            view_key=VIEW_KEY
            title=tab_label_for_key(VIEW_KEY)
            records=policy_exceptions()
            columns=columns()
            filters=filters
            row_id=exception_id
            detail=exception_detail
            default_sort="expires_on"
            chips=status_chips
        />
    }
}
