pub mod components;
pub mod date_utils;
pub mod export;
pub mod filterable_table;
pub mod icons;
pub mod list_utils;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
