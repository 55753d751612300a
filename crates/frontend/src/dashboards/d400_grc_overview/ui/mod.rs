pub mod dashboard;

pub use dashboard::GrcOverviewDashboard;
