use crate::mission_management::types::MissionStatus;

/// Status criterion of a query: match everything or one exact status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(MissionStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: MissionStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Field the result sequence is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    StartDate,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Full description of a mission selection.
///
/// # Fields Overview
///
/// - `status`: keep missions matching this status filter
/// - `search`: case-insensitive substring looked up in title and description;
///   an empty term matches everything
/// - `sort_field` / `direction`: ordering of the result sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionQuery {
    pub status: StatusFilter,
    pub search: String,
    pub sort_field: SortField,
    pub direction: SortDirection,
}

impl Default for MissionQuery {
    /// Matches the combined missions/sanctions view's initial state: every
    /// status, no search term, most recent start date first.
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            search: String::new(),
            sort_field: SortField::StartDate,
            direction: SortDirection::Descending,
        }
    }
}
