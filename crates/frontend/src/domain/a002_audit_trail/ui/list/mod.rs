use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::ui::badge_of;
use crate::shared::date_utils::format_datetime;
use crate::shared::filterable_table::{chips_by, detail_grid, ColumnDef, FilterDef, FilterableTable};
use contracts::domain::a002_audit_trail::aggregate::{FILTER_MODULE, FILTER_SEVERITY};
use contracts::domain::a002_audit_trail::sample_data::audit_modules;
use contracts::domain::a002_audit_trail::{audit_trail, AuditTrailEntry};
use contracts::enums::Severity;
use contracts::shared::status_tone::StatusTone;
use leptos::prelude::*;

const VIEW_KEY: &str = "a002_audit_trail";

type Col = ColumnDef<AuditTrailEntry>;

fn columns() -> Vec<Col> {
    vec![
        Col::text("timestamp", "Timestamp", |e| format_datetime(&e.timestamp)).width(140.0),
        Col::search("actor", "Actor", |e| e.actor.clone()).width(150.0),
        Col::text("module", "Module", |e| e.module.clone()),
        Col::search("event", "Event", |e| e.event.clone()).width(200.0),
        Col::search("entity_ref", "Entity", |e| e.entity_ref.clone()),
        Col::badge("severity", "Severity", |e| badge_of(e.severity)).width(100.0),
    ]
}

fn entry_id(entry: &AuditTrailEntry) -> String {
    entry.id.clone()
}

fn severity_chips(rows: &[AuditTrailEntry]) -> Vec<(&'static str, usize, StatusTone)> {
    chips_by(rows, |e| e.severity)
}

fn audit_detail(entry: &AuditTrailEntry) -> AnyView {
    detail_grid(vec![
        ("Event ID", entry.id.clone()),
        ("Change", entry.change_summary.clone()),
    ])
}

/// Configuration and data changes across the core systems
#[component]
pub fn AuditTrailList() -> impl IntoView {
    let filters = vec![
        FilterDef::distinct(FILTER_MODULE, "Module", audit_modules(), "All modules"),
        FilterDef::of::<Severity>(FILTER_SEVERITY, "Severity", "All severities"),
    ];

    view! {
        <FilterableTable
            view_key=VIEW_KEY
            title=tab_label_for_key(VIEW_KEY)
            records=audit_trail()
            columns=columns()
            filters=filters
            row_id=entry_id
            detail=audit_detail
            default_sort="timestamp"
            chips=severity_chips
        />
    }
}
