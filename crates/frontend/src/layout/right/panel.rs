//! Right panel: open views and the reference date the figures use.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use contracts::shared::config::DashboardConfig;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn RightPanel() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_context::<DashboardConfig>().expect("DashboardConfig not found");
    let reference_date = format_date(&config.today().format("%Y-%m-%d").to_string());

    view! {
        <div class="app-panel__content">
            <div class="windows-list">
                <div class="windows-list__header">
                    <h3>"Open views"</h3>
                    <span class="windows-list__count">
                        {move || format!("({})", ctx.opened.get().len())}
                    </span>
                </div>

                <div class="windows-list__items">
                    <For
                        each=move || ctx.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab| {
                            let key_for_active = tab.key.clone();
                            let key_for_switch = tab.key.clone();
                            let key_for_close = tab.key.clone();
                            view! {
                                <div
                                    class="windows-list__item"
                                    class:windows-list__item--active=move || {
                                        ctx.active.get().as_ref() == Some(&key_for_active)
                                    }
                                    on:click=move |_| ctx.activate_tab(&key_for_switch)
                                >
                                    <span class="windows-list__item-title">{tab.title.clone()}</span>
                                    <button
                                        class="windows-list__item-close"
                                        on:click=move |ev: ev::MouseEvent| {
                                            ev.stop_propagation();
                                            ctx.close_tab(&key_for_close);
                                        }
                                        title="Close view"
                                    >
                                        {icon("x")}
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </div>

            <div class="app-panel__section">
                <div class="app-panel__label">"Reference date"</div>
                <div class="app-panel__value">{reference_date}</div>
                <div class="app-panel__hint">
                    "Overdue and upcoming figures are computed as of this date."
                </div>
            </div>
        </div>
    }
}
