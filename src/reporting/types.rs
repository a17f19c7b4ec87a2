use crate::mission_management::types::{Mission, MissionStatus};
use serde::Serialize;

/// Mission counts per lifecycle status.
///
/// Every status is represented, including those with a zero count; the sum
/// of the four counters always equals the size of the source collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusBreakdown {
    pub planned: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl StatusBreakdown {
    pub fn count_for(&self, status: MissionStatus) -> usize {
        match status {
            MissionStatus::Planned => self.planned,
            MissionStatus::InProgress => self.in_progress,
            MissionStatus::Completed => self.completed,
            MissionStatus::Cancelled => self.cancelled,
        }
    }

    pub fn total(&self) -> usize {
        self.planned + self.in_progress + self.completed + self.cancelled
    }
}

/// Missions whose start date falls within one calendar month.
///
/// `label` is the localized "month year" heading shown on the dashboard;
/// missions keep the insertion order of the source collection.
#[derive(Debug, Clone, Serialize)]
pub struct MonthGroup {
    pub label: String,
    pub missions: Vec<Mission>,
}
