pub mod aggregate;
pub mod sample_data;

pub use aggregate::{PolicyCategory, PolicyEntry, PolicyStatus};
pub use sample_data::{policies, POLICIES};
