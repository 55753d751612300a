pub mod aggregate;
pub mod sample_data;

pub use aggregate::AuditTrailEntry;
pub use sample_data::{audit_trail, AUDIT_TRAIL};
