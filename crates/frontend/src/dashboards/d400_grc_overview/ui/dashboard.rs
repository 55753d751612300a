use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::Badge as UiBadge;
use crate::shared::date_utils::format_date;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DASHBOARD};
use contracts::dashboards::d400_grc_overview::dto::Breakdown;
use contracts::dashboards::d400_grc_overview::build_overview;
use contracts::shared::config::DashboardConfig;
use leptos::prelude::*;

const VIEW_KEY: &str = "d400_grc_overview";

fn card_icon(key: &str) -> &'static str {
    match key {
        "open_incidents" => "alert-triangle",
        "overdue_submissions" => "send",
        "elevated_risks" => "shield",
        "elevated_vendors" => "building",
        "policies_in_progress" => "book",
        "upcoming_training" => "calendar",
        "failed_controls" => "check-square",
        "pending_exceptions" => "clock",
        _ => "bar-chart",
    }
}

/// Headline figures across all registers; each card opens its register
#[component]
pub fn GrcOverviewDashboard() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_context::<DashboardConfig>().expect("DashboardConfig not found");

    let overview = build_overview(config.today());
    log::debug!(
        "overview as of {}: {} cards, {} breakdowns",
        overview.as_of,
        overview.cards.len(),
        overview.breakdowns.len()
    );

    let cards = overview
        .cards
        .into_iter()
        .map(|card| {
            let view_key = card.view_key.clone();
            let open_register = Callback::new(move |_| {
                tabs_store.open_tab(&view_key, tab_label_for_key(&view_key));
            });
            view! {
                <StatCard
                    label=card.title
                    icon_name=card_icon(&card.key)
                    value=card.value
                    tone=card.tone
                    subtitle=format!("of {}", card.out_of)
                    on_click=open_register
                />
            }
        })
        .collect_view();

    let breakdowns = overview
        .breakdowns
        .into_iter()
        .map(|breakdown| view! { <BreakdownPanel breakdown=breakdown /> })
        .collect_view();

    view! {
        <PageFrame page_id=page_id(VIEW_KEY, PAGE_CAT_DASHBOARD) category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{tab_label_for_key(VIEW_KEY)}</h1>
                    <span class="page__subtitle">
                        {format!("{} · as of {}", config.app.organisation, format_date(&overview.as_of))}
                    </span>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">{cards}</div>
                <div class="breakdown-grid">{breakdowns}</div>
            </div>
        </PageFrame>
    }
}

/// Proportional bar plus legend for one distribution
#[component]
fn BreakdownPanel(breakdown: Breakdown) -> impl IntoView {
    let total: usize = breakdown.buckets.iter().map(|(_, n, _)| n).sum();

    let segments = breakdown
        .buckets
        .iter()
        .filter(|(_, n, _)| *n > 0)
        .map(|(label, n, tone)| {
            view! {
                <div
                    class=format!("breakdown__segment {}", tone.badge_class())
                    style=format!("flex-grow: {};", n)
                    title=format!("{}: {}", label, n)
                ></div>
            }
        })
        .collect_view();

    let legend = breakdown
        .buckets
        .into_iter()
        .map(|(label, n, tone)| {
            view! {
                <li class="breakdown__legend-item">
                    <UiBadge tone=tone>{label}</UiBadge>
                    <span class="breakdown__count">{n}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="breakdown">
            <h3 class="breakdown__title">
                {breakdown.title}
                <span class="breakdown__total">{format!(" ({})", total)}</span>
            </h3>
            <div class="breakdown__bar">{segments}</div>
            <ul class="breakdown__legend">{legend}</ul>
        </div>
    }
}
