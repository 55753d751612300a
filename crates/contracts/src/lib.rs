//! Shared GRC dashboard contracts: record types, literal sample data and the
//! filtering/sorting/export logic every list view is built from.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
