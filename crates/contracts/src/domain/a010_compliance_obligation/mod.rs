pub mod aggregate;
pub mod sample_data;

pub use aggregate::{ComplianceObligation, ComplianceStatus};
pub use sample_data::{obligations, OBLIGATIONS};
