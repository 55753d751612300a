pub mod d400_grc_overview;

pub use d400_grc_overview::ui::GrcOverviewDashboard;
