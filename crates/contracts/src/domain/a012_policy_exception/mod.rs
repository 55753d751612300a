pub mod aggregate;
pub mod sample_data;

pub use aggregate::{ApprovalStatus, PolicyException};
pub use sample_data::{policy_exceptions, POLICY_EXCEPTIONS};
