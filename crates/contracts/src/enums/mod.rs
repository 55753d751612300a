pub mod frequency;
pub mod priority;
pub mod risk_level;
pub mod severity;

pub use frequency::Frequency;
pub use priority::Priority;
pub use risk_level::RiskLevel;
pub use severity::Severity;
