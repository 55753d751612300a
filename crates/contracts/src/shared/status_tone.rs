use serde::{Deserialize, Serialize};

/// Visual status a category value is rendered with.
///
/// Replaces the per-view "status to colour" lookups: every category enum maps
/// its values to a tone and the UI maps tones to badge classes in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusTone {
    Success,
    Warning,
    Error,
    Primary,
    Neutral,
}

impl StatusTone {
    /// BEM modifier class of the `badge` block
    pub fn badge_class(&self) -> &'static str {
        match self {
            StatusTone::Success => "badge--success",
            StatusTone::Warning => "badge--warning",
            StatusTone::Error => "badge--error",
            StatusTone::Primary => "badge--primary",
            StatusTone::Neutral => "badge--neutral",
        }
    }

    /// Modifier class of the `stat-card` block
    pub fn stat_card_class(&self) -> &'static str {
        match self {
            StatusTone::Success => "stat-card stat-card--success",
            StatusTone::Warning => "stat-card stat-card--warning",
            StatusTone::Error => "stat-card stat-card--error",
            StatusTone::Primary | StatusTone::Neutral => "stat-card",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_classes_are_distinct() {
        let all = [
            StatusTone::Success,
            StatusTone::Warning,
            StatusTone::Error,
            StatusTone::Primary,
            StatusTone::Neutral,
        ];
        let mut classes: Vec<&str> = all.iter().map(|t| t.badge_class()).collect();
        classes.sort();
        classes.dedup();
        assert_eq!(classes.len(), all.len());
    }

    #[test]
    fn test_stat_card_class() {
        assert_eq!(StatusTone::Error.stat_card_class(), "stat-card stat-card--error");
        assert_eq!(StatusTone::Neutral.stat_card_class(), "stat-card");
    }
}
