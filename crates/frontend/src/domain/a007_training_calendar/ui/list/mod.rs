use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::ui::badge_of;
use crate::shared::date_utils::{format_date, reference_date};
use crate::shared::filterable_table::{chips_by, detail_grid, ColumnDef, FilterDef, FilterableTable};
use crate::shared::number_format::{format_number_with_decimals, format_percent};
use contracts::domain::a007_training_calendar::aggregate::{FILTER_MODE, FILTER_STATUS, FILTER_TOPIC};
use contracts::domain::a007_training_calendar::{
    training_sessions, DeliveryMode, SessionStatus, TrainingSession, TrainingTopic,
};
use contracts::shared::status_tone::StatusTone;
use leptos::prelude::*;

const VIEW_KEY: &str = "a007_training_calendar";

type Col = ColumnDef<TrainingSession>;

fn columns() -> Vec<Col> {
    vec![
        Col::custom("date", "Date", date_cell).width(110.0),
        Col::search("title", "Session", |t| t.title.clone()).width(220.0),
        Col::badge("topic", "Topic", |t| badge_of(t.topic)),
        Col::badge("mode", "Mode", |t| badge_of(t.mode)).unsorted(),
        Col::search("trainer", "Trainer", |t| t.trainer.clone()),
        Col::text("utilisation", "Seats", |t| {
            format!("{}/{} ({})", t.enrolled, t.capacity, format_percent(t.utilisation_percent()))
        })
        .right(),
        Col::badge("status", "Status", |t| badge_of(t.status)),
    ]
}

fn date_cell(session: &TrainingSession) -> AnyView {
    let date = format_date(&session.date);
    if session.is_upcoming(reference_date()) {
        view! { <span class="text--primary" title="Upcoming">{date}</span> }.into_any()
    } else {
        date.into_any()
    }
}

fn session_id(session: &TrainingSession) -> String {
    session.id.clone()
}

fn status_chips(rows: &[TrainingSession]) -> Vec<(&'static str, usize, StatusTone)> {
    chips_by(rows, |t| t.status)
}

fn session_detail(session: &TrainingSession) -> AnyView {
    let mandatory = if session.mandatory { "Mandatory" } else { "Optional" };
    detail_grid(vec![
        ("Audience", session.audience.clone()),
        (
            "Duration",
            format!("{} h", format_number_with_decimals(f64::from(session.duration_hours), 1)),
        ),
        ("Seats left", session.seats_left().to_string()),
        ("Attendance", mandatory.to_string()),
    ])
}

/// Scheduled compliance and security awareness sessions
#[component]
pub fn TrainingCalendarList() -> impl IntoView {
    let filters = vec![
        FilterDef::of::<TrainingTopic>(FILTER_TOPIC, "Topic", "All topics"),
        FilterDef::of::<DeliveryMode>(FILTER_MODE, "Mode", "All modes"),
        FilterDef::of::<SessionStatus>(FILTER_STATUS, "Status", "All statuses"),
    ];

    view! {
        <FilterableTable
            view_key=VIEW_KEY
            title=tab_label_for_key(VIEW_KEY)
            records=training_sessions()
            columns=columns()
            filters=filters
            row_id=session_id
            detail=session_detail
            default_sort="date"
            chips=status_chips
        />
    }
}
