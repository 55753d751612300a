pub mod aggregate;
pub mod sample_data;

pub use aggregate::{DeliveryMode, SessionStatus, TrainingSession, TrainingTopic};
pub use sample_data::{training_sessions, TRAINING_SESSIONS};
