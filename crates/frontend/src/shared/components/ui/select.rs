use contracts::shared::category::ALL_SELECTION;
use leptos::prelude::*;

/// `true` when `selection` narrows the table, i.e. is not the "all" entry
pub fn is_narrowing(selection: &str) -> bool {
    !selection.is_empty() && selection != ALL_SELECTION
}

/// Labelled dropdown for one categorical filter. The first option is the
/// "all" entry; the control is highlighted while anything else is picked.
#[component]
pub fn FilterSelect(
    label: &'static str,
    #[prop(into)]
    id: String,
    /// Selected option value
    #[prop(into)]
    selection: Signal<String>,
    /// (value, label) pairs in display order
    options: Vec<(String, String)>,
    on_select: Callback<String>,
) -> impl IntoView {
    let for_id = id.clone();

    view! {
        <div class="form__group">
            <label class="form__label" for=for_id>{label}</label>
            <select
                id=id
                class="form__select"
                class:form__select--active=move || selection.with(|s| is_narrowing(s))
                on:change=move |ev| on_select.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(value, text)| {
                        let option_value = value.clone();
                        view! {
                            <option
                                value=value
                                selected=move || selection.with(|s| *s == option_value)
                            >
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_narrowing() {
        assert!(is_narrowing("Viewed"));
        assert!(!is_narrowing(ALL_SELECTION));
        assert!(!is_narrowing(""));
    }
}
