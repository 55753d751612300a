//! Tab content registry: the single mapping from tab.key to a view.

use crate::dashboards::d400_grc_overview::ui::GrcOverviewDashboard;
use crate::domain::a001_access_log::ui::list::AccessLogList;
use crate::domain::a002_audit_trail::ui::list::AuditTrailList;
use crate::domain::a003_vendor_risk::ui::list::VendorRiskList;
use crate::domain::a004_policy_repository::ui::list::PolicyRepositoryList;
use crate::domain::a005_soc_shift_log::ui::list::SocShiftLogList;
use crate::domain::a006_sebi_submission::ui::list::SebiSubmissionList;
use crate::domain::a007_training_calendar::ui::list::TrainingCalendarList;
use crate::domain::a008_risk_register::ui::list::RiskRegisterList;
use crate::domain::a009_incident_register::ui::list::IncidentRegisterList;
use crate::domain::a010_compliance_obligation::ui::list::ComplianceObligationList;
use crate::domain::a011_control_testing::ui::list::ControlTestingList;
use crate::domain::a012_policy_exception::ui::list::PolicyExceptionList;
use leptos::logging::log;
use leptos::prelude::*;

/// Every key `render_tab_content` knows
pub const VIEW_KEYS: &[&str] = &[
    "d400_grc_overview",
    "a001_access_log",
    "a002_audit_trail",
    "a003_vendor_risk",
    "a004_policy_repository",
    "a005_soc_shift_log",
    "a006_sebi_submission",
    "a007_training_calendar",
    "a008_risk_register",
    "a009_incident_register",
    "a010_compliance_obligation",
    "a011_control_testing",
    "a012_policy_exception",
];

/// Content of the tab with `key`, or a placeholder for unknown keys
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // Dashboards
        "d400_grc_overview" => view! { <GrcOverviewDashboard /> }.into_any(),

        // Registers
        "a001_access_log" => view! { <AccessLogList /> }.into_any(),
        "a002_audit_trail" => view! { <AuditTrailList /> }.into_any(),
        "a003_vendor_risk" => view! { <VendorRiskList /> }.into_any(),
        "a004_policy_repository" => view! { <PolicyRepositoryList /> }.into_any(),
        "a005_soc_shift_log" => view! { <SocShiftLogList /> }.into_any(),
        "a006_sebi_submission" => view! { <SebiSubmissionList /> }.into_any(),
        "a007_training_calendar" => view! { <TrainingCalendarList /> }.into_any(),
        "a008_risk_register" => view! { <RiskRegisterList /> }.into_any(),
        "a009_incident_register" => view! { <IncidentRegisterList /> }.into_any(),
        "a010_compliance_obligation" => view! { <ComplianceObligationList /> }.into_any(),
        "a011_control_testing" => view! { <ControlTestingList /> }.into_any(),
        "a012_policy_exception" => view! { <PolicyExceptionList /> }.into_any(),

        _ => {
            log!("unknown tab key: '{}'", key);
            let key = key.to_string();
            view! {
                <div class="placeholder">
                    {format!("Unknown view: {}", key)}
                </div>
            }
            .into_any()
        }
    }
}
