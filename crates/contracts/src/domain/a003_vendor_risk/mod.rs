pub mod aggregate;
pub mod sample_data;

pub use aggregate::{AssessmentStatus, VendorCategory, VendorRiskEntry};
pub use sample_data::{vendors, VENDORS};
