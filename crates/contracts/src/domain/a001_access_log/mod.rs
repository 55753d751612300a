pub mod aggregate;
pub mod sample_data;

pub use aggregate::{AccessAction, AccessLogEntry, AccessOutcome};
pub use sample_data::{access_log, ACCESS_LOG};
