pub mod aggregate;
pub mod sample_data;

pub use aggregate::{Shift, ShiftLogEntry, ShiftStatus};
pub use sample_data::{shift_log, SHIFT_LOG};
