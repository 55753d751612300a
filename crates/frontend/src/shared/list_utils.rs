//! List helpers shared by the table views: search highlighting, sort
//! indicators and the search box.

use leptos::prelude::*;
use std::ops::Range;

/// Byte ranges of `text` split into (range, is_match) pieces for a
/// case-insensitive `query`. An empty query, or a text whose lowercase form
/// changes byte length, comes back as one unmatched piece.
pub fn match_segments(text: &str, query: &str) -> Vec<(Range<usize>, bool)> {
    let query = query.to_lowercase();
    let text_lower = text.to_lowercase();
    if query.is_empty() || text_lower.len() != text.len() {
        return vec![(0..text.len(), false)];
    }

    let mut segments = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&query) {
        let start = last_pos + pos;
        let end = start + query.len();
        if start > last_pos {
            segments.push((last_pos..start, false));
        }
        segments.push((start..end, true));
        last_pos = end;
    }
    if last_pos < text.len() || segments.is_empty() {
        segments.push((last_pos..text.len(), false));
    }
    segments
}

/// Highlights every case-insensitive occurrence of `query` in `text`
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    let parts: Vec<AnyView> = match_segments(text, query)
        .into_iter()
        .map(|(range, is_match)| {
            let piece = text[range].to_string();
            if is_match {
                view! { <mark class="search-highlight">{piece}</mark> }.into_any()
            } else {
                view! { <span>{piece}</span> }.into_any()
            }
        })
        .collect();

    view! { <>{parts}</> }.into_any()
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// CSS class of the sort indicator
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Search box with a clear button. Every keystroke is forwarded.
#[component]
pub fn SearchInput(
    /// Current search text
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new text
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().is_empty();

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    on:click=move |_| on_change.run(String::new())
                    title="Clear"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces<'a>(text: &'a str, query: &str) -> Vec<(&'a str, bool)> {
        match_segments(text, query)
            .into_iter()
            .map(|(range, m)| (&text[range], m))
            .collect()
    }

    #[test]
    fn test_match_segments_case_insensitive() {
        assert_eq!(
            pieces("Alice Johnson", "JOHN"),
            vec![("Alice ", false), ("John", true), ("son", false)]
        );
    }

    #[test]
    fn test_match_segments_every_occurrence() {
        assert_eq!(
            pieces("ana banana", "an"),
            vec![("an", true), ("a b", false), ("an", true), ("an", true), ("a", false)]
        );
    }

    #[test]
    fn test_whitespace_in_query_is_matched_literally() {
        assert_eq!(
            pieces("Alice Johnson", "e j"),
            vec![("Alic", false), ("e J", true), ("ohnson", false)]
        );
        assert_eq!(pieces("Alice Johnson", "Johnson "), vec![("Alice Johnson", false)]);
    }

    #[test]
    fn test_single_character_query_highlights() {
        assert_eq!(pieces("Bob", "o"), vec![("B", false), ("o", true), ("b", false)]);
    }

    #[test]
    fn test_empty_or_missing_query_is_unmatched() {
        assert_eq!(pieces("Bob", ""), vec![("Bob", false)]);
        assert_eq!(pieces("Bob", "  "), vec![("Bob", false)]);
        assert_eq!(pieces("Bob", "zz"), vec![("Bob", false)]);
        assert_eq!(pieces("", "a"), vec![("", false)]);
    }

    #[test]
    fn test_sort_indicator_and_class() {
        assert_eq!(get_sort_indicator("id", "id", true), " ▲");
        assert_eq!(get_sort_indicator("id", "id", false), " ▼");
        assert_eq!(get_sort_indicator("id", "title", true), " ⇅");
        assert!(get_sort_class("id", "id").ends_with("--active"));
        assert_eq!(get_sort_class("id", "title"), "table__sort-indicator");
    }
}
