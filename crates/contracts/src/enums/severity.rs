use crate::shared::category::CategoryValue;
use crate::shared::status_tone::StatusTone;
use serde::{Deserialize, Serialize};

/// Event and incident severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl CategoryValue for Severity {
    fn all() -> &'static [Self] {
        &[
            Severity::Info,
            Severity::Low,
            Severity::Medium,
            Severity::High,
            Severity::Critical,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            Severity::Info => StatusTone::Neutral,
            Severity::Low => StatusTone::Primary,
            Severity::Medium => StatusTone::Warning,
            Severity::High | Severity::Critical => StatusTone::Error,
        }
    }
}
