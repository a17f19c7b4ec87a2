use crate::mission_management::types::{Mission, MissionStatus};
use crate::reporting::types::{MonthGroup, StatusBreakdown};
use chrono::Locale;

/// Counts missions per lifecycle status.
pub fn status_breakdown(missions: &[Mission]) -> StatusBreakdown {
    let mut breakdown = StatusBreakdown::default();
    for mission in missions {
        match mission.status {
            MissionStatus::Planned => breakdown.planned += 1,
            MissionStatus::InProgress => breakdown.in_progress += 1,
            MissionStatus::Completed => breakdown.completed += 1,
            MissionStatus::Cancelled => breakdown.cancelled += 1,
        }
    }
    breakdown
}

/// Groups missions by the calendar month of their start date.
///
/// Groups appear in first-appearance order and missions within a group keep
/// the insertion order of the source collection; no chronological reordering
/// happens within a month.
pub fn missions_by_month(missions: &[Mission], locale: Locale) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();
    for mission in missions {
        let label = month_label(mission, locale);
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.missions.push(mission.clone()),
            None => groups.push(MonthGroup {
                label,
                missions: vec![mission.clone()],
            }),
        }
    }
    groups
}

fn month_label(mission: &Mission, locale: Locale) -> String {
    mission
        .start_date
        .format_localized("%B %Y", locale)
        .to_string()
}
