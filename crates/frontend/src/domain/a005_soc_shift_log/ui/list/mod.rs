use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::ui::badge_of;
use crate::shared::date_utils::format_date;
use crate::shared::filterable_table::{chips_by, detail_grid, ColumnDef, FilterDef, FilterableTable};
use crate::shared::number_format::format_percent;
use contracts::domain::a005_soc_shift_log::aggregate::{FILTER_PRIORITY, FILTER_SHIFT, FILTER_STATUS};
use contracts::domain::a005_soc_shift_log::{shift_log, Shift, ShiftLogEntry, ShiftStatus};
use contracts::enums::Priority;
use contracts::shared::status_tone::StatusTone;
use leptos::prelude::*;

const VIEW_KEY: &str = "a005_soc_shift_log";

type Col = ColumnDef<ShiftLogEntry>;

fn columns() -> Vec<Col> {
    vec![
        Col::text("shift_date", "Date", |s| format_date(&s.shift_date)).width(100.0),
        Col::badge("shift", "Shift", |s| badge_of(s.shift)).width(100.0),
        Col::search("analyst", "Analyst", |s| s.analyst.clone()).width(150.0),
        Col::text("alerts_triaged", "Alerts", |s| s.alerts_triaged.to_string()).width(80.0).right(),
        Col::text("false_positive_rate", "False Positives", |s| {
            format_percent(s.false_positive_rate())
        })
        .unsorted()
        .right(),
        Col::text("incidents_escalated", "Escalated", |s| s.incidents_escalated.to_string())
            .width(90.0)
            .right(),
        Col::badge("priority", "Priority", |s| badge_of(s.priority)).width(100.0),
        Col::badge("status", "Status", |s| badge_of(s.status)),
        Col::search("summary", "Summary", |s| s.summary.clone()).width(240.0).unsorted(),
    ]
}

fn shift_id(entry: &ShiftLogEntry) -> String {
    entry.id.clone()
}

fn priority_chips(rows: &[ShiftLogEntry]) -> Vec<(&'static str, usize, StatusTone)> {
    chips_by(rows, |s| s.priority)
}

fn shift_detail(entry: &ShiftLogEntry) -> AnyView {
    detail_grid(vec![
        ("Hours", entry.shift.hours().to_string()),
        ("False positives", entry.false_positives.to_string()),
        ("Summary", entry.summary.clone()),
        ("Handover notes", entry.handover_notes.clone()),
    ])
}

/// Security operations centre handovers, one row per shift
#[component]
pub fn SocShiftLogList() -> impl IntoView {
    let filters = vec![
        FilterDef::of::<Shift>(FILTER_SHIFT, "Shift", "All shifts"),
        FilterDef::of::<Priority>(FILTER_PRIORITY, "Priority", "All priorities"),
        FilterDef::of::<ShiftStatus>(FILTER_STATUS, "Status", "All statuses"),
    ];

    view! {
        <FilterableTable
            view_key=VIEW_KEY
            title=tab_label_for_key(VIEW_KEY)
            records=shift_log()
            columns=columns()
            filters=filters
            row_id=shift_id
            detail=shift_detail
            chips=priority_chips
        />
    }
}
