pub mod category;
pub mod config;
pub mod dates;
pub mod export;
pub mod record_filter;
pub mod record_sort;
pub mod status_tone;
pub mod summary;
