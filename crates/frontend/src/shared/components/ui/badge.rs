use contracts::shared::category::CategoryValue;
use contracts::shared::status_tone::StatusTone;
use leptos::prelude::*;

/// Badge coloured by a status tone
#[component]
pub fn Badge(
    tone: StatusTone,
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", tone.badge_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Badge for one categorical value, using the value's own tone
#[component]
pub fn CategoryBadge(
    #[prop(into)]
    label: String,
    tone: StatusTone,
) -> impl IntoView {
    view! {
        <Badge tone=tone>{label}</Badge>
    }
}

/// Label and tone of a category value, the shape `CategoryBadge` takes
pub fn badge_of<E: CategoryValue>(value: E) -> (&'static str, StatusTone) {
    (value.as_str(), value.tone())
}
