//! CSV export of the rows currently visible in a table.
//!
//! Semicolon separated with a UTF-8 BOM so spreadsheet tools open it with the
//! right encoding.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("nothing to export: the current filter matches no rows")]
    Empty,
}

/// Record that can be written as one CSV row
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

pub const CSV_SEPARATOR: char = ';';

/// Builds the CSV document for `rows`.
pub fn build_csv<T: CsvExportable>(rows: &[T]) -> Result<String, ExportError> {
    if rows.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut csv = String::new();
    csv.push('\u{FEFF}');
    push_line(&mut csv, T::headers().iter().map(|h| h.to_string()));
    for row in rows {
        push_line(&mut csv, row.to_csv_row().into_iter());
    }
    Ok(csv)
}

fn push_line(csv: &mut String, cells: impl Iterator<Item = String>) {
    let escaped: Vec<String> = cells.map(|cell| escape_csv_cell(&cell)).collect();
    csv.push_str(&escaped.join(&CSV_SEPARATOR.to_string()));
    csv.push('\n');
}

/// Quotes a cell containing the separator, quotes or line breaks
pub fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(CSV_SEPARATOR) || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// File name for an export of `entity`, e.g. `a001_access_log_2026-10-16.csv`
pub fn export_file_name(entity: &str, date: &str) -> String {
    format!("{}_{}.csv", entity, date)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line {
        name: &'static str,
        note: &'static str,
    }

    impl CsvExportable for Line {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Note"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.name.to_string(), self.note.to_string()]
        }
    }

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_build_csv_layout() {
        let rows = vec![
            Line { name: "Alice", note: "ok" },
            Line { name: "Bob", note: "needs; review" },
        ];
        let csv = build_csv(&rows).expect("csv");
        assert!(csv.starts_with('\u{FEFF}'));
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines, vec!["Name;Note", "Alice;ok", "Bob;\"needs; review\""]);
    }

    #[test]
    fn test_build_csv_rejects_empty() {
        let rows: Vec<Line> = Vec::new();
        assert_eq!(build_csv(&rows), Err(ExportError::Empty));
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("a001_access_log", "2026-10-16"), "a001_access_log_2026-10-16.csv");
    }
}
