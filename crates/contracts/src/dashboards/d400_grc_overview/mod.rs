pub mod dto;
pub mod metrics;

pub use dto::{GrcOverview, OverviewCard};
pub use metrics::build_overview;
