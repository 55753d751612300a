pub mod badge;
pub mod select;

pub use badge::{badge_of, Badge, CategoryBadge};
pub use select::{is_narrowing, FilterSelect};
