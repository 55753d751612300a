use crate::shared::icons::icon;
use crate::shared::number_format::format_number_with_decimals;
use contracts::shared::status_tone::StatusTone;
use leptos::prelude::*;

/// Headline figure with an icon, coloured by tone
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    value: usize,
    tone: StatusTone,
    /// Optional line below the value, e.g. "of 12"
    #[prop(optional, into)]
    subtitle: Option<String>,
    /// Makes the card clickable
    #[prop(optional)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let class = format!(
        "{}{}",
        tone.stat_card_class(),
        if on_click.is_some() { " stat-card--clickable" } else { "" }
    );

    view! {
        <div
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{format_number_with_decimals(value as f64, 0)}</div>
                {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
