use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::ui::badge_of;
use crate::shared::date_utils::{format_date, reference_date};
use crate::shared::filterable_table::{chips_by, detail_grid, ColumnDef, FilterDef, FilterableTable};
use crate::shared::number_format::format_lakh;
use contracts::domain::a003_vendor_risk::aggregate::{FILTER_ASSESSMENT, FILTER_CATEGORY, FILTER_RISK_LEVEL};
use contracts::domain::a003_vendor_risk::{vendors, AssessmentStatus, VendorCategory, VendorRiskEntry};
use contracts::enums::RiskLevel;
use contracts::shared::status_tone::StatusTone;
use leptos::prelude::*;

const VIEW_KEY: &str = "a003_vendor_risk";

type Col = ColumnDef<VendorRiskEntry>;

fn columns() -> Vec<Col> {
    vec![
        Col::search("vendor_name", "Vendor", |v| v.vendor_name.clone()).width(180.0),
        Col::badge("category", "Category", |v| badge_of(v.category)),
        Col::badge("risk_level", "Risk", |v| badge_of(v.risk_level)).width(100.0),
        Col::text("risk_score", "Score", |v| v.risk_score.to_string()).width(80.0).right(),
        Col::badge("assessment_status", "Assessment", |v| badge_of(v.assessment_status)),
        Col::custom("next_review", "Next Review", next_review_cell),
        Col::search("owner", "Owner", |v| v.owner.clone()),
        Col::text("contract_value", "Contract Value", |v| format_lakh(v.contract_value)).right(),
    ]
}

fn next_review_cell(vendor: &VendorRiskEntry) -> AnyView {
    let date = format_date(&vendor.next_review);
    if vendor.is_review_overdue(reference_date()) {
        view! { <span class="text--error" title="Review overdue">{date}</span> }.into_any()
    } else {
        date.into_any()
    }
}

fn vendor_id(vendor: &VendorRiskEntry) -> String {
    vendor.id.clone()
}

fn risk_chips(rows: &[VendorRiskEntry]) -> Vec<(&'static str, usize, StatusTone)> {
    chips_by(rows, |v| v.risk_level)
}

fn vendor_detail(vendor: &VendorRiskEntry) -> AnyView {
    let personal_data = if vendor.handles_personal_data { "Yes" } else { "No" };
    detail_grid(vec![
        ("Services", vendor.services.clone()),
        ("Last assessed", format_date(&vendor.last_assessed)),
        ("Handles personal data", personal_data.to_string()),
    ])
}

/// Third parties with their inherent risk and assessment cycle
#[component]
pub fn VendorRiskList() -> impl IntoView {
    let filters = vec![
        FilterDef::of::<VendorCategory>(FILTER_CATEGORY, "Category", "All categories"),
        FilterDef::of::<RiskLevel>(FILTER_RISK_LEVEL, "Risk level", "All levels"),
        FilterDef::of::<AssessmentStatus>(FILTER_ASSESSMENT, "Assessment", "All assessments"),
    ];

    view! {
        <FilterableTable
            view_key=VIEW_KEY
            title=tab_label_for_key(VIEW_KEY)
            records=vendors()
            columns=columns()
            filters=filters
            row_id=vendor_id
            detail=vendor_detail
            chips=risk_chips
        />
    }
}
