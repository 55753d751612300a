pub mod aggregate;
pub mod sample_data;

pub use aggregate::{RegulatorySubmission, SubmissionStatus};
pub use sample_data::{submissions, SUBMISSIONS};
