use crate::shared::status_tone::StatusTone;
use serde::{Deserialize, Serialize};

/// One headline figure of the overview dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewCard {
    /// Stable key, e.g. "open_incidents"
    pub key: String,
    pub title: String,
    pub value: usize,
    /// Size of the population the value was counted from
    pub out_of: usize,
    pub tone: StatusTone,
    /// Tab key of the list view the card drills into
    pub view_key: String,
}

/// Distribution of one categorical field, in declared order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub title: String,
    pub buckets: Vec<(String, usize, StatusTone)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrcOverview {
    /// Reference date the figures were computed for, "YYYY-MM-DD"
    pub as_of: String,
    pub cards: Vec<OverviewCard>,
    pub breakdowns: Vec<Breakdown>,
}

impl GrcOverview {
    pub fn card(&self, key: &str) -> Option<&OverviewCard> {
        self.cards.iter().find(|c| c.key == key)
    }
}
