use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::ui::badge_of;
use crate::shared::date_utils::format_date;
use crate::shared::filterable_table::{chips_by, detail_grid, ColumnDef, FilterDef, FilterableTable};
use contracts::domain::a008_risk_register::aggregate::{FILTER_CATEGORY, FILTER_LEVEL, FILTER_STATUS};
use contracts::domain::a008_risk_register::{risks, RiskCategory, RiskEntry, RiskStatus};
use contracts::enums::RiskLevel;
use contracts::shared::status_tone::StatusTone;
use leptos::prelude::*;

const VIEW_KEY: &str = "a008_risk_register";

type Col = ColumnDef<RiskEntry>;

fn columns() -> Vec<Col> {
    vec![
        Col::text("id", "ID", |r| r.id.clone()).width(90.0),
        Col::search("title", "Risk", |r| r.title.clone()).width(240.0),
        Col::badge("category", "Category", |r| badge_of(r.category)),
        Col::text("score", "Score", |r| format!("{} × {} = {}", r.likelihood, r.impact, r.score()))
            .width(110.0)
            .right(),
        Col::badge("level", "Level", |r| badge_of(r.level())).unsorted(),
        Col::search("owner", "Owner", |r| r.owner.clone()),
        Col::badge("treatment", "Treatment", |r| badge_of(r.treatment)).unsorted(),
        Col::badge("status", "Status", |r| badge_of(r.status)),
    ]
}

fn risk_id(risk: &RiskEntry) -> String {
    risk.id.clone()
}

fn level_chips(rows: &[RiskEntry]) -> Vec<(&'static str, usize, StatusTone)> {
    chips_by(rows, |r| r.level())
}

fn risk_detail(risk: &RiskEntry) -> AnyView {
    detail_grid(vec![
        ("Description", risk.description.clone()),
        ("Likelihood", risk.likelihood.to_string()),
        ("Impact", risk.impact.to_string()),
        ("Last reviewed", format_date(&risk.last_reviewed)),
    ])
}

/// Enterprise risks scored by likelihood and impact
#[component]
pub fn RiskRegisterList() -> impl IntoView {
    let filters = vec![
        FilterDef::of::<RiskCategory>(FILTER_CATEGORY, "Category", "All categories"),
        FilterDef::of::<RiskLevel>(FILTER_LEVEL, "Level", "All levels"),
        FilterDef::of::<RiskStatus>(FILTER_STATUS, "Status", "All statuses"),
    ];

    view! {
        <FilterableTable
            view_key=VIEW_KEY
            title=tab_label_for_key(VIEW_KEY)
            records=risks()
            columns=columns()
            filters=filters
            row_id=risk_id
            detail=risk_detail
            chips=level_chips
        />
    }
}
