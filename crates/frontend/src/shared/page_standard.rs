//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares an HTML `id` in the format
//! `{view_key}--{category}` (e.g. `"a001_access_log--list"`) and a
//! `data-page-category` with one of the constants below. The view key
//! before `--` is the directory under `domain/` or `dashboards/`.

/// Table of records with search, filters and export
pub const PAGE_CAT_LIST: &str = "list";

/// Summary page built from several registers
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD];

/// Validate that a page id matches the `{view_key}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

/// Page id for a view key and category
pub fn page_id(view_key: &str, category: &str) -> String {
    format!("{view_key}--{category}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        let id = page_id("a001_access_log", PAGE_CAT_LIST);
        assert_eq!(id, "a001_access_log--list");
        assert!(is_valid_page_id(&id));
    }

    #[test]
    fn test_invalid_page_ids() {
        assert!(!is_valid_page_id("a001_access_log"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_access_log--detail"));
    }
}
