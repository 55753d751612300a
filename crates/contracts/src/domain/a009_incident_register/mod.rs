pub mod aggregate;
pub mod sample_data;

pub use aggregate::{IncidentEntry, IncidentStatus, IncidentType};
pub use sample_data::{incidents, INCIDENTS};
