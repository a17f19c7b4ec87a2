//! Client-side filter and sort pipeline for the mission collection.
//!
//! Components:
//! - `types`: the query description (status filter, search term, sort spec).
//! - `pipeline`: the pure selection function applying a query to a slice.

pub mod pipeline;
pub mod types;

pub use pipeline::select;
pub use types::{MissionQuery, SortDirection, SortField, StatusFilter};
