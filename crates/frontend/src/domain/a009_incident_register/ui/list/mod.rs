use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::ui::badge_of;
use crate::shared::date_utils::format_datetime;
use crate::shared::filterable_table::{chips_by, detail_grid, ColumnDef, FilterDef, FilterableTable};
use contracts::domain::a009_incident_register::aggregate::{
    FILTER_SEVERITY, FILTER_STATUS, FILTER_TYPE, REGULATOR_REPORTING_HOURS,
};
use contracts::domain::a009_incident_register::{incidents, IncidentEntry, IncidentStatus, IncidentType};
use contracts::enums::Severity;
use contracts::shared::status_tone::StatusTone;
use leptos::prelude::*;

const VIEW_KEY: &str = "a009_incident_register";

type Col = ColumnDef<IncidentEntry>;

fn columns() -> Vec<Col> {
    vec![
        Col::text("id", "ID", |i| i.id.clone()).width(120.0),
        Col::text("reported_at", "Reported", |i| format_datetime(&i.reported_at)).width(140.0),
        Col::search("title", "Incident", |i| i.title.clone()).width(240.0),
        Col::badge("incident_type", "Type", |i| badge_of(i.incident_type)).unsorted(),
        Col::badge("severity", "Severity", |i| badge_of(i.severity)).width(100.0),
        Col::badge("status", "Status", |i| badge_of(i.status)),
        Col::search("assigned_to", "Assigned To", |i| i.assigned_to.clone()),
        Col::custom("regulator", "Regulator", regulator_cell).unsorted(),
    ]
}

fn regulator_cell(incident: &IncidentEntry) -> AnyView {
    if !incident.is_reportable() {
        return "Not reportable".into_any();
    }
    match incident.hours_to_notification() {
        Some(hours) if !incident.breaches_reporting_window() => format!("Notified in {} h", hours).into_any(),
        Some(hours) => view! {
            <span class="text--error">{format!("Notified late ({} h)", hours)}</span>
        }
        .into_any(),
        None => view! { <span class="text--error">"Not notified"</span> }.into_any(),
    }
}

fn incident_id(incident: &IncidentEntry) -> String {
    incident.id.clone()
}

fn status_chips(rows: &[IncidentEntry]) -> Vec<(&'static str, usize, StatusTone)> {
    chips_by(rows, |i| i.status)
}

fn incident_detail(incident: &IncidentEntry) -> AnyView {
    let notified = incident
        .regulator_notified_at
        .as_deref()
        .map(format_datetime)
        .unwrap_or_else(|| "—".to_string());
    detail_grid(vec![
        ("Reporter", incident.reporter.clone()),
        ("Affected systems", incident.affected_systems.clone()),
        ("Regulator notified", notified),
        ("Reporting window", format!("{} h", REGULATOR_REPORTING_HOURS)),
    ])
}

/// Security and compliance incidents with regulator notification tracking
#[component]
pub fn IncidentRegisterList() -> impl IntoView {
    let filters = vec![
        FilterDef::of::<IncidentType>(FILTER_TYPE, "Type", "All types"),
        FilterDef::of::<Severity>(FILTER_SEVERITY, "Severity", "All severities"),
        FilterDef::of::<IncidentStatus>(FILTER_STATUS, "Status", "All statuses"),
    ];

    view! {
        <FilterableTable
            view_key=VIEW_KEY
            title=tab_label_for_key(VIEW_KEY)
            records=incidents()
            columns=columns()
            filters=filters
            row_id=incident_id
            detail=incident_detail
            default_sort="reported_at"
            chips=status_chips
        />
    }
}
