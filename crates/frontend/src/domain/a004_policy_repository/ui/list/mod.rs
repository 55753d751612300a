use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::ui::badge_of;
use crate::shared::date_utils::{format_date, reference_date};
use crate::shared::filterable_table::{chips_by, detail_grid, ColumnDef, FilterDef, FilterableTable};
use crate::shared::number_format::format_percent;
use contracts::domain::a004_policy_repository::aggregate::{FILTER_CATEGORY, FILTER_STATUS};
use contracts::domain::a004_policy_repository::{policies, PolicyCategory, PolicyEntry, PolicyStatus};
use contracts::shared::status_tone::StatusTone;
use leptos::prelude::*;

const VIEW_KEY: &str = "a004_policy_repository";

type Col = ColumnDef<PolicyEntry>;

fn columns() -> Vec<Col> {
    vec![
        Col::search("code", "Code", |p| p.code.clone()).width(100.0),
        Col::search("title", "Title", |p| p.title.clone()).width(240.0),
        Col::badge("category", "Category", |p| badge_of(p.category)),
        Col::text("version", "Version", |p| p.version.clone()).width(80.0).unsorted(),
        Col::search("owner", "Owner", |p| p.owner.clone()),
        Col::badge("status", "Status", |p| badge_of(p.status)),
        Col::custom("review_due", "Review Due", review_due_cell),
        Col::text("acknowledgement_rate", "Acknowledged", |p| {
            format_percent(u32::from(p.acknowledgement_rate))
        })
        .right(),
    ]
}

fn review_due_cell(policy: &PolicyEntry) -> AnyView {
    let date = format_date(&policy.review_due);
    if policy.is_review_overdue(reference_date()) {
        view! { <span class="text--error" title="Review overdue">{date}</span> }.into_any()
    } else {
        date.into_any()
    }
}

fn policy_id(policy: &PolicyEntry) -> String {
    policy.id.clone()
}

fn status_chips(rows: &[PolicyEntry]) -> Vec<(&'static str, usize, StatusTone)> {
    chips_by(rows, |p| p.status)
}

fn policy_detail(policy: &PolicyEntry) -> AnyView {
    detail_grid(vec![
        ("Approver", policy.approver.clone()),
        ("Effective from", format_date(&policy.effective_date)),
        ("Version", policy.version.clone()),
    ])
}

/// Approved policies with owners, versions and review dates
#[component]
pub fn PolicyRepositoryList() -> impl IntoView {
    let filters = vec![
        FilterDef::of::<PolicyCategory>(FILTER_CATEGORY, "Category", "All categories"),
        FilterDef::of::<PolicyStatus>(FILTER_STATUS, "Status", "All statuses"),
    ];

    view! {
        <FilterableTable
            view_key=VIEW_KEY
            title=tab_label_for_key(VIEW_KEY)
            records=policies()
            columns=columns()
            filters=filters
            row_id=policy_id
            detail=policy_detail
            default_sort="code"
            chips=status_chips
        />
    }
}
