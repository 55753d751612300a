use crate::shared::category::CategoryValue;
use crate::shared::status_tone::StatusTone;
use serde::{Deserialize, Serialize};

/// How often a filing or obligation recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    Monthly,
    Quarterly,
    HalfYearly,
    Annual,
    EventBased,
}

impl CategoryValue for Frequency {
    fn all() -> &'static [Self] {
        &[
            Frequency::Monthly,
            Frequency::Quarterly,
            Frequency::HalfYearly,
            Frequency::Annual,
            Frequency::EventBased,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::HalfYearly => "Half-Yearly",
            Frequency::Annual => "Annual",
            Frequency::EventBased => "Event-Based",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            Frequency::EventBased => StatusTone::Warning,
            _ => StatusTone::Neutral,
        }
    }
}
