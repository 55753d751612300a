pub mod aggregate;
pub mod sample_data;

pub use aggregate::{ControlTest, Framework, TestResult};
pub use sample_data::{control_tests, CONTROL_TESTS};
