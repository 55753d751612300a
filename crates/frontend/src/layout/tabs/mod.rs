//! Tab management
//!
//! - `page` wraps the content of one tab
//! - `registry` maps tab.key to a view
//! - `tab_labels` holds the tab titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
