use crate::enums::Priority;
use crate::shared::category::CategoryValue;
use crate::shared::export::CsvExportable;
use crate::shared::record_filter::FilterableRecord;
use crate::shared::record_sort::{cmp_text, Sortable};
use crate::shared::status_tone::StatusTone;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const FILTER_SHIFT: &str = "shift";
pub const FILTER_PRIORITY: &str = "priority";
pub const FILTER_STATUS: &str = "status";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    Morning,
    Evening,
    Night,
}

impl Shift {
    pub fn hours(&self) -> &'static str {
        match self {
            Shift::Morning => "06:00-14:00",
            Shift::Evening => "14:00-22:00",
            Shift::Night => "22:00-06:00",
        }
    }
}

impl CategoryValue for Shift {
    fn all() -> &'static [Self] {
        &[Shift::Morning, Shift::Evening, Shift::Night]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Evening => "Evening",
            Shift::Night => "Night",
        }
    }

    fn tone(&self) -> StatusTone {
        StatusTone::Neutral
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftStatus {
    Open,
    HandedOver,
    Closed,
}

impl CategoryValue for ShiftStatus {
    fn all() -> &'static [Self] {
        &[ShiftStatus::Open, ShiftStatus::HandedOver, ShiftStatus::Closed]
    }

    fn as_str(&self) -> &'static str {
        match self {
            ShiftStatus::Open => "Open",
            ShiftStatus::HandedOver => "Handed Over",
            ShiftStatus::Closed => "Closed",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            ShiftStatus::Open => StatusTone::Primary,
            ShiftStatus::HandedOver => StatusTone::Warning,
            ShiftStatus::Closed => StatusTone::Success,
        }
    }
}

/// Security operations centre shift report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftLogEntry {
    pub id: String,
    pub shift_date: String,
    pub shift: Shift,
    pub analyst: String,
    pub alerts_triaged: u32,
    pub false_positives: u32,
    pub incidents_escalated: u32,
    pub priority: Priority,
    pub status: ShiftStatus,
    pub summary: String,
    pub handover_notes: String,
}

impl ShiftLogEntry {
    /// Share of triaged alerts that were false positives, 0..=100
    pub fn false_positive_rate(&self) -> u32 {
        if self.alerts_triaged == 0 {
            0
        } else {
            self.false_positives * 100 / self.alerts_triaged
        }
    }
}

impl FilterableRecord for ShiftLogEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.analyst, &self.summary, &self.handover_notes]
    }

    fn category_value(&self, key: &str) -> Option<&str> {
        match key {
            FILTER_SHIFT => Some(self.shift.as_str()),
            FILTER_PRIORITY => Some(self.priority.as_str()),
            FILTER_STATUS => Some(self.status.as_str()),
            _ => None,
        }
    }
}

impl Sortable for ShiftLogEntry {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "shift_date" => self.shift_date.cmp(&other.shift_date),
            "shift" => (self.shift as u8).cmp(&(other.shift as u8)),
            "analyst" => cmp_text(&self.analyst, &other.analyst),
            "alerts_triaged" => self.alerts_triaged.cmp(&other.alerts_triaged),
            "incidents_escalated" => self.incidents_escalated.cmp(&other.incidents_escalated),
            "priority" => (self.priority as u8).cmp(&(other.priority as u8)),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => Ordering::Equal,
        }
    }
}

impl CsvExportable for ShiftLogEntry {
    fn headers() -> Vec<&'static str> {
        vec!["Date", "Shift", "Analyst", "Alerts", "False Positives", "Escalated", "Priority", "Status", "Summary", "Handover Notes"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.shift_date.clone(),
            self.shift.as_str().to_string(),
            self.analyst.clone(),
            self.alerts_triaged.to_string(),
            self.false_positives.to_string(),
            self.incidents_escalated.to_string(),
            self.priority.as_str().to_string(),
            self.status.as_str().to_string(),
            self.summary.clone(),
            self.handover_notes.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_soc_shift_log::shift_log;
    use crate::shared::record_filter::{filter_records, FilterCriteria};

    #[test]
    fn test_false_positive_rate() {
        let mut entry = shift_log()[0].clone();
        entry.alerts_triaged = 40;
        entry.false_positives = 10;
        assert_eq!(entry.false_positive_rate(), 25);
        entry.alerts_triaged = 0;
        assert_eq!(entry.false_positive_rate(), 0);
    }

    #[test]
    fn test_search_reaches_handover_notes() {
        let result = filter_records(shift_log(), &FilterCriteria::new().with_query("edr"));
        assert!(!result.is_empty());
    }

    #[test]
    fn test_night_shift_open_items() {
        let criteria = FilterCriteria::new()
            .with_category(FILTER_SHIFT, "Night")
            .with_category(FILTER_STATUS, "Handed Over");
        let result = filter_records(shift_log(), &criteria);
        assert!(result
            .iter()
            .all(|e| e.shift == Shift::Night && e.status == ShiftStatus::HandedOver));
    }

    #[test]
    fn test_search_fields() {
        for r in shift_log() {
            assert_eq!(
                r.search_fields(),
                vec![
                    r.analyst.as_str(),
                    r.summary.as_str(),
                    r.handover_notes.as_str(),
                ]
            );
        }
    }
}
