//! PageFrame: root wrapper for every page rendered inside a tab.
//!
//! Sets `id` (`"{view_key}--{category}"`) and `data-page-category` on the
//! root element so a page can be traced back to its module from the DOM.

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on every tab page.
///
/// - `list`      → `page`
/// - `dashboard` → `page page--dashboard`
#[component]
pub fn PageFrame(
    /// HTML id in format `{view_key}--{category}`
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    if !is_valid_page_id(&page_id) {
        log::warn!("page id '{}' does not follow the view_key--category format", page_id);
    }

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
