use crate::shared::category::CategoryValue;
use crate::shared::status_tone::StatusTone;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl CategoryValue for Priority {
    fn all() -> &'static [Self] {
        &[Priority::Low, Priority::Medium, Priority::High, Priority::Critical]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            Priority::Low => StatusTone::Neutral,
            Priority::Medium => StatusTone::Primary,
            Priority::High => StatusTone::Warning,
            Priority::Critical => StatusTone::Error,
        }
    }
}
