//! Column and filter definitions for [`FilterableTable`](super::FilterableTable).
//!
//! Cells are plain function pointers so a whole table definition is `Copy`
//! data that can live in a `StoredValue` without capturing the view state.

use contracts::shared::category::{category_options, distinct_options, CategoryValue};
use contracts::shared::status_tone::StatusTone;
use contracts::shared::summary::count_by;
use leptos::prelude::AnyView;

/// How a cell renders its record
pub enum CellKind<T> {
    /// Plain text
    Text(fn(&T) -> String),
    /// Text with the current search query highlighted
    Search(fn(&T) -> String),
    /// Category value shown as a coloured badge
    Badge(fn(&T) -> (&'static str, StatusTone)),
    Custom(fn(&T) -> AnyView),
}

impl<T> Clone for CellKind<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CellKind<T> {}

pub struct ColumnDef<T> {
    /// Sort key passed to `Sortable::compare_by_field`
    pub key: &'static str,
    pub title: &'static str,
    pub sortable: bool,
    pub min_width: f64,
    pub align_right: bool,
    pub cell: CellKind<T>,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ColumnDef<T> {}

impl<T> ColumnDef<T> {
    fn new(key: &'static str, title: &'static str, cell: CellKind<T>) -> Self {
        Self {
            key,
            title,
            sortable: true,
            min_width: 120.0,
            align_right: false,
            cell,
        }
    }

    pub fn text(key: &'static str, title: &'static str, value: fn(&T) -> String) -> Self {
        Self::new(key, title, CellKind::Text(value))
    }

    /// Text column that is part of the free-text search
    pub fn search(key: &'static str, title: &'static str, value: fn(&T) -> String) -> Self {
        Self::new(key, title, CellKind::Search(value))
    }

    pub fn badge(
        key: &'static str,
        title: &'static str,
        value: fn(&T) -> (&'static str, StatusTone),
    ) -> Self {
        Self::new(key, title, CellKind::Badge(value))
    }

    pub fn custom(key: &'static str, title: &'static str, render: fn(&T) -> AnyView) -> Self {
        Self::new(key, title, CellKind::Custom(render))
    }

    pub fn width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn unsorted(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Right-aligned, for numeric columns
    pub fn right(mut self) -> Self {
        self.align_right = true;
        self
    }

    /// Plain text of the cell, used for tooltips; `None` for custom cells
    pub fn plain_text(&self, record: &T) -> Option<String> {
        match self.cell {
            CellKind::Text(value) | CellKind::Search(value) => Some(value(record)),
            CellKind::Badge(value) => Some(value(record).0.to_string()),
            CellKind::Custom(_) => None,
        }
    }
}

/// One dropdown of the filter panel
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDef {
    /// Key understood by `FilterableRecord::category_value`
    pub key: &'static str,
    pub label: &'static str,
    /// `(value, label)` pairs, "all" first
    pub options: Vec<(String, String)>,
}

impl FilterDef {
    /// Dropdown over every declared value of a category enum
    pub fn of<E: CategoryValue>(key: &'static str, label: &'static str, all_label: &str) -> Self {
        Self {
            key,
            label,
            options: category_options::<E>(all_label),
        }
    }

    /// Dropdown over the distinct values found in the data
    pub fn distinct<'a, I>(key: &'static str, label: &'static str, values: I, all_label: &str) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            key,
            label,
            options: distinct_options(values, all_label),
        }
    }

    /// Label of a selected value, falls back to the value itself
    pub fn option_label<'a>(&'a self, value: &'a str) -> &'a str {
        self.options
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, label)| label.as_str())
            .unwrap_or(value)
    }
}

/// Header chips from a category count over `rows`, zero counts left out
pub fn chips_by<T, E, F>(rows: &[T], accessor: F) -> Vec<(&'static str, usize, StatusTone)>
where
    E: CategoryValue,
    F: Fn(&T) -> E,
{
    count_by(rows, accessor)
        .into_iter()
        .filter(|(_, n)| *n > 0)
        .map(|(value, n)| (value.as_str(), n, value.tone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::Severity;

    struct Row {
        name: &'static str,
        severity: Severity,
    }

    #[test]
    fn test_builders_and_plain_text() {
        let name = ColumnDef::<Row>::search("name", "Name", |r| r.name.to_string())
            .width(200.0)
            .unsorted();
        let severity = ColumnDef::<Row>::badge("severity", "Severity", |r| {
            (r.severity.as_str(), r.severity.tone())
        })
        .right();

        let row = Row { name: "Core banking", severity: Severity::High };
        assert_eq!(name.min_width, 200.0);
        assert!(!name.sortable);
        assert!(severity.sortable && severity.align_right);
        assert_eq!(name.plain_text(&row).as_deref(), Some("Core banking"));
        assert_eq!(severity.plain_text(&row).as_deref(), Some("High"));
    }

    #[test]
    fn test_filter_def_of_enum() {
        let filter = FilterDef::of::<Severity>("severity", "Severity", "All severities");
        assert_eq!(filter.options.len(), Severity::all().len() + 1);
        assert_eq!(filter.option_label("all"), "All severities");
        assert_eq!(filter.option_label("High"), "High");
    }

    #[test]
    fn test_filter_def_distinct() {
        let filter = FilterDef::distinct("module", "Module", ["IAM", "Treasury", "IAM"], "All modules");
        let values: Vec<&str> = filter.options.iter().map(|(v, _)| v.as_str()).collect();
        assert_eq!(values, vec!["all", "IAM", "Treasury"]);
    }

    #[test]
    fn test_chips_skip_empty_values() {
        let rows = vec![
            Row { name: "a", severity: Severity::High },
            Row { name: "b", severity: Severity::High },
            Row { name: "c", severity: Severity::Low },
        ];
        let chips = chips_by(&rows, |r| r.severity);
        let summary: Vec<(&str, usize)> = chips.iter().map(|(label, n, _)| (*label, *n)).collect();
        assert_eq!(summary, vec![("Low", 1), ("High", 2)]);
    }
}
