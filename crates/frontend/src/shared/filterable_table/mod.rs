//! Generic list page shared by every register view.

pub mod column;
pub mod state;
pub mod view;

pub use column::{chips_by, CellKind, ColumnDef, FilterDef};
pub use state::TableState;
pub use view::{detail_grid, FilterableTable};
