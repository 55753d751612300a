//! Client-side record filter shared by every list view.
//!
//! A record is visible iff the free-text query matches at least one of its
//! searchable fields (case-insensitive substring) and every active categorical
//! filter equals the record's field exactly. Filtering never reorders.

use crate::shared::category::ALL_SELECTION;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Record that can be narrowed by [`FilterCriteria`].
pub trait FilterableRecord {
    /// Field values checked by the free-text search
    fn search_fields(&self) -> Vec<&str>;

    /// Value of the categorical field addressed by `key`, `None` when the
    /// record has no such field
    fn category_value(&self, key: &str) -> Option<&str>;
}

/// One dropdown-style constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Exact(String),
}

impl CategoryFilter {
    /// Builds a filter from a dropdown selection; `"all"` and the empty
    /// string both mean no constraint.
    pub fn from_selection(selection: &str) -> Self {
        if selection.is_empty() || selection == ALL_SELECTION {
            CategoryFilter::All
        } else {
            CategoryFilter::Exact(selection.to_string())
        }
    }

    /// Value to put back into the dropdown
    pub fn as_selection(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_SELECTION,
            CategoryFilter::Exact(value) => value,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, CategoryFilter::Exact(_))
    }

    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Exact(expected) => value == Some(expected.as_str()),
        }
    }
}

/// Current search text plus categorical selections of one table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub query: String,
    pub categories: BTreeMap<String, CategoryFilter>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, key: &str, selection: &str) -> Self {
        self.set_category(key, selection);
        self
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Stores the dropdown selection for `key`; selecting "all" removes it.
    pub fn set_category(&mut self, key: &str, selection: &str) {
        match CategoryFilter::from_selection(selection) {
            CategoryFilter::All => {
                self.categories.remove(key);
            }
            filter => {
                self.categories.insert(key.to_string(), filter);
            }
        }
    }

    pub fn clear_category(&mut self, key: &str) {
        self.categories.remove(key);
    }

    pub fn reset(&mut self) {
        self.query.clear();
        self.categories.clear();
    }

    /// Dropdown value for `key`, "all" when unset
    pub fn selection(&self, key: &str) -> &str {
        self.categories
            .get(key)
            .map(CategoryFilter::as_selection)
            .unwrap_or(ALL_SELECTION)
    }

    /// Lowercased query, `None` when empty. Whitespace is part of the
    /// query and is matched literally.
    fn normalized_query(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.to_lowercase())
        }
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Number of constraints in effect (query counts as one)
    pub fn active_filters_count(&self) -> usize {
        let categories = self.categories.values().filter(|f| f.is_active()).count();
        categories + usize::from(self.has_query())
    }

    pub fn is_empty(&self) -> bool {
        self.active_filters_count() == 0
    }

    pub fn matches<T: FilterableRecord>(&self, record: &T) -> bool {
        self.matches_normalized(record, self.normalized_query().as_deref())
    }

    fn matches_normalized<T: FilterableRecord>(&self, record: &T, query: Option<&str>) -> bool {
        let query_ok = match query {
            None => true,
            Some(q) => record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(q)),
        };

        query_ok
            && self
                .categories
                .iter()
                .all(|(key, filter)| filter.matches(record.category_value(key)))
    }
}

/// Visible subset of `records`, in their original order.
pub fn filter_records<'a, T: FilterableRecord>(
    records: &'a [T],
    criteria: &FilterCriteria,
) -> Vec<&'a T> {
    let query = criteria.normalized_query();
    let visible: Vec<&T> = records
        .iter()
        .filter(|record| criteria.matches_normalized(*record, query.as_deref()))
        .collect();
    log::trace!(
        "record filter: {} of {} visible ({} active filters)",
        visible.len(),
        records.len(),
        criteria.active_filters_count()
    );
    visible
}

/// Owned variant of [`filter_records`] for reactive views.
pub fn filter_cloned<T: FilterableRecord + Clone>(records: &[T], criteria: &FilterCriteria) -> Vec<T> {
    filter_records(records, criteria).into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        user: &'static str,
        document: &'static str,
        action: &'static str,
    }

    impl FilterableRecord for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.user, self.document]
        }

        fn category_value(&self, key: &str) -> Option<&str> {
            match key {
                "action" => Some(self.action),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { user: "Alice Johnson", document: "Q3 Board Pack", action: "Downloaded" },
            Row { user: "Bob Smith", document: "Vendor Contract", action: "Viewed" },
            Row { user: "Carol Alison", document: "AML Policy", action: "Viewed" },
            Row { user: "Dan Brown", document: "Alice Springs Audit", action: "Edited" },
        ]
    }

    fn users(result: &[&Row]) -> Vec<&'static str> {
        result.iter().map(|r| r.user).collect()
    }

    #[test]
    fn test_documented_example() {
        let records = vec![
            Row { user: "Alice Johnson", document: "", action: "Downloaded" },
            Row { user: "Bob Smith", document: "", action: "Viewed" },
        ];

        let by_query = filter_records(&records, &FilterCriteria::new().with_query("alice"));
        assert_eq!(users(&by_query), vec!["Alice Johnson"]);

        let by_action = filter_records(&records, &FilterCriteria::new().with_category("action", "Viewed"));
        assert_eq!(users(&by_action), vec!["Bob Smith"]);

        let both = FilterCriteria::new()
            .with_query("smith")
            .with_category("action", "Downloaded");
        assert!(filter_records(&records, &both).is_empty());
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let records = rows();
        let result = filter_cloned(&records, &FilterCriteria::new());
        assert_eq!(result, records);

        let all_sentinel = FilterCriteria::new().with_query("").with_category("action", "all");
        assert_eq!(filter_cloned(&records, &all_sentinel), records);
    }

    #[test]
    fn test_query_is_case_insensitive_and_searches_every_field() {
        let records = rows();
        let lower = filter_records(&records, &FilterCriteria::new().with_query("alice"));
        let upper = filter_records(&records, &FilterCriteria::new().with_query("ALICE"));
        assert_eq!(lower, upper);
        // "Alice Johnson" by user, "Alice Springs Audit" by document
        assert_eq!(users(&lower), vec!["Alice Johnson", "Dan Brown"]);
    }

    #[test]
    fn test_query_whitespace_is_literal() {
        let records = vec![
            Row { user: "Alice Johnson", document: "", action: "Viewed" },
            Row { user: "Bob", document: "", action: "Viewed" },
        ];
        let trailing = filter_records(&records, &FilterCriteria::new().with_query("Johnson "));
        assert!(trailing.is_empty());

        let inner = filter_records(&records, &FilterCriteria::new().with_query("e j"));
        assert_eq!(users(&inner), vec!["Alice Johnson"]);

        let space = FilterCriteria::new().with_query(" ");
        assert!(space.has_query());
        assert_eq!(users(&filter_records(&records, &space)), vec!["Alice Johnson"]);
    }

    #[test]
    fn test_result_is_ordered_subset() {
        let records = rows();
        let criteria = FilterCriteria::new().with_query("o");
        let result = filter_records(&records, &criteria);

        let mut last_index = None;
        for row in &result {
            let index = records.iter().position(|r| r == *row).expect("row from input");
            assert!(last_index.map_or(true, |last| index > last));
            last_index = Some(index);
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = rows();
        let criteria = FilterCriteria::new().with_query("a").with_category("action", "Viewed");
        let once = filter_cloned(&records, &criteria);
        let twice = filter_cloned(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_additional_category_never_grows_result() {
        let records = rows();
        let base = FilterCriteria::new().with_query("o");
        let narrowed = base.clone().with_category("action", "Viewed");
        assert!(filter_records(&records, &narrowed).len() <= filter_records(&records, &base).len());
    }

    #[test]
    fn test_unknown_category_key_matches_nothing() {
        let records = rows();
        let criteria = FilterCriteria::new().with_category("department", "Finance");
        assert!(filter_records(&records, &criteria).is_empty());
    }

    #[test]
    fn test_category_match_is_exact() {
        let records = rows();
        let criteria = FilterCriteria::new().with_category("action", "viewed");
        assert!(filter_records(&records, &criteria).is_empty());
    }

    #[test]
    fn test_set_category_all_removes_constraint() {
        let mut criteria = FilterCriteria::new().with_category("action", "Viewed");
        assert_eq!(criteria.selection("action"), "Viewed");
        assert_eq!(criteria.active_filters_count(), 1);

        criteria.set_category("action", ALL_SELECTION);
        assert_eq!(criteria.selection("action"), ALL_SELECTION);
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_active_filters_count_includes_query() {
        let mut criteria = FilterCriteria::new()
            .with_query("bob")
            .with_category("action", "Viewed")
            .with_category("outcome", "Denied");
        assert_eq!(criteria.active_filters_count(), 3);

        criteria.clear_category("outcome");
        assert_eq!(criteria.active_filters_count(), 2);

        criteria.reset();
        assert!(criteria.is_empty());
        assert_eq!(criteria.query, "");
    }

    #[test]
    fn test_criteria_serde_round_trip_keeps_selections() {
        let criteria = FilterCriteria::new().with_query("x").with_category("action", "Edited");
        let json = serde_json::to_value(&criteria).expect("serialize");
        let back: FilterCriteria = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back.selection("action"), "Edited");
        assert_eq!(back.query, "x");
    }
}
