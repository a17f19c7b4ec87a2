//! Derived views over the mission collection.
//!
//! Pure, idempotent builders: nothing here mutates the store, and calling a
//! builder twice on the same collection yields the same result.

pub mod types;
pub mod views;

pub use types::{MonthGroup, StatusBreakdown};
pub use views::{missions_by_month, status_breakdown};
