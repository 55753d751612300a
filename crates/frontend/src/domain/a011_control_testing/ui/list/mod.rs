use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::ui::badge_of;
use crate::shared::date_utils::format_date;
use crate::shared::filterable_table::{chips_by, ColumnDef, FilterDef, FilterableTable};
use crate::shared::number_format::format_number_with_decimals;
use contracts::domain::a011_control_testing::aggregate::{FILTER_FRAMEWORK, FILTER_RESULT};
use contracts::domain::a011_control_testing::{control_tests, ControlTest, Framework, TestResult};
use contracts::shared::status_tone::StatusTone;
use leptos::prelude::*;

const VIEW_KEY: &str = "a011_control_testing";

type Col = ColumnDef<ControlTest>;

fn columns() -> Vec<Col> {
    vec![
        Col::search("control_ref", "Control", |c| c.control_ref.clone()).width(100.0),
        Col::search("control_name", "Name", |c| c.control_name.clone()).width(240.0),
        Col::badge("framework", "Framework", |c| badge_of(c.framework)).unsorted(),
        Col::search("tester", "Tester", |c| c.tester.clone()),
        Col::text("test_date", "Tested", |c| format_date(&c.test_date)).width(100.0),
        Col::text("exception_rate", "Exceptions", |c| {
            format!(
                "{}/{} ({} %)",
                c.exceptions_found,
                c.sample_size,
                format_number_with_decimals(c.exception_rate(), 1)
            )
        })
        .right(),
        Col::custom("evidence_count", "Evidence", evidence_cell).width(90.0).right(),
        Col::badge("result", "Result", |c| badge_of(c.result)).unsorted(),
    ]
}

fn evidence_cell(test: &ControlTest) -> AnyView {
    if test.lacks_evidence() {
        view! { <span class="text--error" title="No evidence attached">"0"</span> }.into_any()
    } else {
        test.evidence_count.to_string().into_any()
    }
}

fn test_id(test: &ControlTest) -> String {
    test.id.clone()
}

fn result_chips(rows: &[ControlTest]) -> Vec<(&'static str, usize, StatusTone)> {
    chips_by(rows, |c| c.result)
}

/// Design and operating effectiveness tests per control framework
#[component]
pub fn ControlTestingList() -> impl IntoView {
    let filters = vec![
        FilterDef::of::<Framework>(FILTER_FRAMEWORK, "Framework", "All frameworks"),
        FilterDef::of::<TestResult>(FILTER_RESULT, "Result", "All results"),
    ];

    view! {
        <FilterableTable
            view_key=VIEW_KEY
            title=tab_label_for_key(VIEW_KEY)
            records=control_tests()
            columns=columns()
            filters=filters
            row_id=test_id
            default_sort="test_date"
            chips=result_chips
        />
    }
}
