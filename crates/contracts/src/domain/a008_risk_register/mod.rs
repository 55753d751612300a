pub mod aggregate;
pub mod sample_data;

pub use aggregate::{RiskCategory, RiskEntry, RiskStatus, Treatment};
pub use sample_data::{risks, RISKS};
