use super::column::FilterDef;
use contracts::shared::record_filter::{filter_cloned, FilterCriteria, FilterableRecord};
use contracts::shared::record_sort::{sort_records, Sortable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Per-table UI state, kept in the tab's form state between visits
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableState {
    pub criteria: FilterCriteria,
    pub sort_field: Option<String>,
    pub sort_ascending: bool,
    pub expanded_ids: HashSet<String>,
}

/// What an active filter chip removes when closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagTarget {
    Query,
    Category(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTag {
    pub target: TagTarget,
    pub label: String,
}

impl TableState {
    pub fn new(sort_field: Option<&str>, sort_ascending: bool) -> Self {
        Self {
            criteria: FilterCriteria::new(),
            sort_field: sort_field.map(str::to_string),
            sort_ascending,
            expanded_ids: HashSet::new(),
        }
    }

    /// Clicking the current sort column flips direction, any other column
    /// becomes the ascending sort key.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field.as_deref() == Some(field) {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = Some(field.to_string());
            self.sort_ascending = true;
        }
    }

    pub fn sort_field_or_empty(&self) -> String {
        self.sort_field.clone().unwrap_or_default()
    }

    pub fn toggle_expanded(&mut self, id: &str) {
        if !self.expanded_ids.remove(id) {
            self.expanded_ids.insert(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_ids.contains(id)
    }

    pub fn reset_filters(&mut self) {
        self.criteria.reset();
    }

    pub fn remove_tag(&mut self, target: &TagTarget) {
        match target {
            TagTarget::Query => self.criteria.set_query(""),
            TagTarget::Category(key) => self.criteria.clear_category(key),
        }
    }

    /// Chips for the active constraints, query first, then filters in
    /// panel order
    pub fn active_tags(&self, filters: &[FilterDef]) -> Vec<ActiveTag> {
        let mut tags = Vec::new();
        if self.criteria.has_query() {
            tags.push(ActiveTag {
                target: TagTarget::Query,
                label: format!("Search: \"{}\"", self.criteria.query),
            });
        }
        for filter in filters {
            if let Some(selected) = self.criteria.categories.get(filter.key) {
                if selected.is_active() {
                    tags.push(ActiveTag {
                        target: TagTarget::Category(filter.key),
                        label: format!(
                            "{}: {}",
                            filter.label,
                            filter.option_label(selected.as_selection())
                        ),
                    });
                }
            }
        }
        tags
    }

    /// Filtered rows in source order, then sorted when a sort column is set
    pub fn visible_rows<T>(&self, records: &[T]) -> Vec<T>
    where
        T: FilterableRecord + Sortable + Clone,
    {
        let mut rows = filter_cloned(records, &self.criteria);
        if let Some(field) = &self.sort_field {
            sort_records(&mut rows, field, self.sort_ascending);
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_access_log::aggregate::{AccessAction, FILTER_ACTION, FILTER_OUTCOME};
    use contracts::domain::a001_access_log::{access_log, AccessOutcome};
    use contracts::shared::category::CategoryValue;

    fn filters() -> Vec<FilterDef> {
        vec![
            FilterDef::of::<AccessAction>(FILTER_ACTION, "Action", "All actions"),
            FilterDef::of::<AccessOutcome>(FILTER_OUTCOME, "Outcome", "All outcomes"),
        ]
    }

    #[test]
    fn test_toggle_sort_cycles_direction() {
        let mut state = TableState::new(Some("timestamp"), false);
        state.toggle_sort("timestamp");
        assert!(state.sort_ascending);
        state.toggle_sort("timestamp");
        assert!(!state.sort_ascending);

        state.toggle_sort("user");
        assert_eq!(state.sort_field.as_deref(), Some("user"));
        assert!(state.sort_ascending);
    }

    #[test]
    fn test_toggle_expanded() {
        let mut state = TableState::default();
        state.toggle_expanded("LOG-1");
        assert!(state.is_expanded("LOG-1"));
        state.toggle_expanded("LOG-1");
        assert!(!state.is_expanded("LOG-1"));
    }

    #[test]
    fn test_visible_rows_without_sort_keep_source_order() {
        let state = TableState::default();
        let rows = state.visible_rows(access_log());
        assert_eq!(rows.as_slice(), access_log());
    }

    #[test]
    fn test_visible_rows_filter_then_sort() {
        let mut state = TableState::new(Some("user"), true);
        state.criteria.set_category(FILTER_OUTCOME, "Denied");
        let rows = state.visible_rows(access_log());
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|r| r.outcome == AccessOutcome::Denied));
        assert!(rows
            .windows(2)
            .all(|w| w[0].user.to_lowercase() <= w[1].user.to_lowercase()));
    }

    #[test]
    fn test_active_tags_and_removal() {
        let mut state = TableState::default();
        state.criteria.set_query("alice");
        state.criteria.set_category(FILTER_ACTION, AccessAction::Downloaded.as_str());

        let tags = state.active_tags(&filters());
        let labels: Vec<&str> = tags.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Search: \"alice\"", "Action: Downloaded"]);

        state.remove_tag(&TagTarget::Category(FILTER_ACTION));
        assert_eq!(state.active_tags(&filters()).len(), 1);
        state.remove_tag(&TagTarget::Query);
        assert!(state.active_tags(&filters()).is_empty());
    }

    #[test]
    fn test_whitespace_query_is_a_tag() {
        let mut state = TableState::default();
        state.criteria.set_query(" ");
        let tags = state.active_tags(&filters());
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].label, "Search: \" \"");
    }

    #[test]
    fn test_reset_keeps_sort() {
        let mut state = TableState::new(Some("user"), true);
        state.criteria.set_query("bob");
        state.reset_filters();
        assert!(state.criteria.is_empty());
        assert_eq!(state.sort_field.as_deref(), Some("user"));
    }

    #[test]
    fn test_state_survives_json_round_trip() {
        let mut state = TableState::new(Some("user"), false);
        state.criteria.set_category(FILTER_OUTCOME, "Flagged");
        state.toggle_expanded("LOG-3");
        let value = serde_json::to_value(&state).expect("serialize");
        let back: TableState = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, state);
    }
}
