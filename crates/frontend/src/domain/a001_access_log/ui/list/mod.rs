use crate::shared::components::ui::badge_of;
use crate::shared::date_utils::format_datetime;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::filterable_table::{chips_by, detail_grid, ColumnDef, FilterDef, FilterableTable};
use contracts::domain::a001_access_log::aggregate::{FILTER_ACTION, FILTER_OUTCOME};
use contracts::domain::a001_access_log::{access_log, AccessAction, AccessLogEntry, AccessOutcome};
use contracts::shared::status_tone::StatusTone;
use leptos::prelude::*;

const VIEW_KEY: &str = "a001_access_log";

type Col = ColumnDef<AccessLogEntry>;

fn columns() -> Vec<Col> {
    vec![
        Col::text("timestamp", "Timestamp", |e| format_datetime(&e.timestamp)).width(140.0),
        Col::search("user", "User", |e| e.user.clone()).width(160.0),
        Col::search("department", "Department", |e| e.department.clone()),
        Col::search("document", "Document", |e| e.document.clone()).width(220.0),
        Col::text("classification", "Classification", |e| e.classification.clone()).unsorted(),
        Col::badge("action", "Action", |e| badge_of(e.action)).width(110.0),
        Col::search("ip_address", "IP Address", |e| e.ip_address.clone()).unsorted(),
        Col::badge("outcome", "Outcome", |e| badge_of(e.outcome)).width(110.0),
    ]
}

fn entry_id(entry: &AccessLogEntry) -> String {
    entry.id.clone()
}

fn outcome_chips(rows: &[AccessLogEntry]) -> Vec<(&'static str, usize, StatusTone)> {
    chips_by(rows, |e| e.outcome)
}

fn access_detail(entry: &AccessLogEntry) -> AnyView {
    let review = if entry.needs_review() {
        "Needs review"
    } else {
        "No action required"
    };
    detail_grid(vec![
        ("Event", entry.id.clone()),
        ("Classification", entry.classification.clone()),
        ("Source IP", entry.ip_address.clone()),
        ("Review", review.to_string()),
    ])
}

/// Who opened, downloaded or shared which document
#[component]
pub fn AccessLogList() -> impl IntoView {
    let filters = vec![
        FilterDef::of::<AccessAction>(FILTER_ACTION, "Action", "All actions"),
        FilterDef::of::<AccessOutcome>(FILTER_OUTCOME, "Outcome", "All outcomes"),
    ];

    view! {
        <FilterableTable
            view_key=VIEW_KEY
            title=tab_label_for_key(VIEW_KEY)
            records=access_log()
            columns=columns()
            filters=filters
            row_id=entry_id
            detail=access_detail
            chips=outcome_chips
        />
    }
}
