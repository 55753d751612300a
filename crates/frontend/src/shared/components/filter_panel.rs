use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible panel holding the search box and the category dropdowns.
///
/// Content is rendered once and hidden with a modifier class, so inputs
/// keep focus and value while the panel is collapsed.
#[component]
pub fn FilterPanel(
    is_expanded: RwSignal<bool>,

    /// Number of active filters (badge in the header)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Text in the header centre, e.g. "12 of 40 rows"
    #[prop(into)]
    summary: Signal<String>,

    children: Children,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle_expanded>
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="filter-panel__badge">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    <span class="filter-panel__summary">{move || summary.get()}</span>
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">{children()}</div>
            </div>
        </div>
    }
}

/// One active filter chip with a remove button
#[component]
pub fn FilterTag(
    #[prop(into)]
    label: String,

    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
