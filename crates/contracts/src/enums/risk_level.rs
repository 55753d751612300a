use crate::shared::category::CategoryValue;
use crate::shared::status_tone::StatusTone;
use serde::{Deserialize, Serialize};

/// Four-step risk rating shared by vendors, risks and policy exceptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Rating of a likelihood x impact score on the 5x5 matrix
    pub fn from_score(score: u8) -> Self {
        match score {
            15.. => RiskLevel::Critical,
            10..=14 => RiskLevel::High,
            5..=9 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    pub fn is_elevated(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Critical)
    }
}

impl CategoryValue for RiskLevel {
    fn all() -> &'static [Self] {
        &[RiskLevel::Low, RiskLevel::Medium, RiskLevel::High, RiskLevel::Critical]
    }

    fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }

    fn tone(&self) -> StatusTone {
        match self {
            RiskLevel::Low => StatusTone::Success,
            RiskLevel::Medium => StatusTone::Warning,
            RiskLevel::High | RiskLevel::Critical => StatusTone::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_score_bands() {
        assert_eq!(RiskLevel::from_score(1), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(4), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(5), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(9), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(10), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(14), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(15), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(25), RiskLevel::Critical);
    }

    #[test]
    fn test_is_elevated() {
        assert!(RiskLevel::Critical.is_elevated());
        assert!(!RiskLevel::Medium.is_elevated());
    }
}
