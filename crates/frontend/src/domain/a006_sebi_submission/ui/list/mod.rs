use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::ui::badge_of;
use crate::shared::date_utils::{format_date, format_relative_days, reference_date};
use crate::shared::filterable_table::{chips_by, detail_grid, ColumnDef, FilterDef, FilterableTable};
use contracts::domain::a006_sebi_submission::aggregate::{FILTER_FREQUENCY, FILTER_STATUS};
use contracts::domain::a006_sebi_submission::{submissions, RegulatorySubmission, SubmissionStatus};
use contracts::enums::Frequency;
use contracts::shared::status_tone::StatusTone;
use leptos::prelude::*;

const VIEW_KEY: &str = "a006_sebi_submission";

type Col = ColumnDef<RegulatorySubmission>;

fn columns() -> Vec<Col> {
    vec![
        Col::search("reference", "Reference", |s| s.reference.clone()).width(130.0),
        Col::search("title", "Return", |s| s.title.clone()).width(240.0),
        Col::search("regulation", "Regulation", |s| s.regulation.clone()),
        Col::badge("frequency", "Frequency", |s| badge_of(s.frequency)).unsorted(),
        Col::text("period", "Period", |s| s.period.clone()).width(100.0).unsorted(),
        Col::custom("due_date", "Due", due_cell).width(150.0),
        Col::badge("status", "Status", |s| badge_of(s.status)),
        Col::search("owner", "Owner", |s| s.owner.clone()),
    ]
}

fn due_cell(submission: &RegulatorySubmission) -> AnyView {
    let today = reference_date();
    let date = format_date(&submission.due_date);
    if submission.is_overdue(today) {
        view! { <span class="text--error" title="Overdue">{date}</span> }.into_any()
    } else if submission.is_due_soon(today) {
        let hint = submission
            .days_until_due(today)
            .map(format_relative_days)
            .unwrap_or_default();
        view! { <span class="text--warning" title=hint>{date}</span> }.into_any()
    } else {
        date.into_any()
    }
}

fn submission_id(submission: &RegulatorySubmission) -> String {
    submission.id.clone()
}

fn status_chips(rows: &[RegulatorySubmission]) -> Vec<(&'static str, usize, StatusTone)> {
    chips_by(rows, |s| s.status)
}

fn submission_detail(submission: &RegulatorySubmission) -> AnyView {
    let filed = match submission.submitted_on.as_deref() {
        Some(date) if submission.filed_late() => format!("{} (late)", format_date(date)),
        Some(date) => format_date(date),
        None => "Not filed".to_string(),
    };
    detail_grid(vec![
        ("Authority", submission.authority.clone()),
        ("Period", submission.period.clone()),
        ("Filed on", filed),
    ])
}

/// Periodic and event-based filings to the market regulator
#[component]
pub fn SebiSubmissionList() -> impl IntoView {
    let filters = vec![
        FilterDef::of::<Frequency>(FILTER_FREQUENCY, "Frequency", "All frequencies"),
        FilterDef::of::<SubmissionStatus>(FILTER_STATUS, "Status", "All statuses"),
    ];

    view! {
        <FilterableTable
            view_key=VIEW_KEY
            title=tab_label_for_key(VIEW_KEY)
            records=submissions()
            columns=columns()
            filters=filters
            row_id=submission_id
            detail=submission_detail
            default_sort="due_date"
            chips=status_chips
        />
    }
}
