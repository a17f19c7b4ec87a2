use crate::mission_management::types::Mission;
use crate::query::types::{MissionQuery, SortDirection, SortField};
use std::cmp::Ordering;

/// Applies a query to the mission collection and produces a new ordered
/// sequence. Pure: the input slice is left untouched.
///
/// A mission passes the filter when its status matches the query's status
/// filter and, if a search term is set, the term occurs case-insensitively in
/// its title or description. The sort is stable: missions comparing equal on
/// the sort key keep their relative input order, in both directions.
pub fn select(missions: &[Mission], query: &MissionQuery) -> Vec<Mission> {
    let needle = query.search.trim().to_lowercase();

    let mut selected: Vec<Mission> = missions
        .iter()
        .filter(|mission| query.status.matches(mission.status) && matches_search(mission, &needle))
        .cloned()
        .collect();

    // Vec::sort_by is stable; flipping the comparator (not reversing the
    // output) keeps ties in input order for descending sorts too.
    selected.sort_by(|a, b| {
        let ordering = match query.sort_field {
            SortField::StartDate => a.start_date.cmp(&b.start_date),
            SortField::Title => compare_titles(&a.title, &b.title),
        };
        match query.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    selected
}

fn matches_search(mission: &Mission, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    mission.title.to_lowercase().contains(needle)
        || mission.description.to_lowercase().contains(needle)
}

/// Title comparison on folded keys, with the raw titles as a deterministic
/// tie-break so "alpha" and "Alpha" order consistently.
fn compare_titles(a: &str, b: &str) -> Ordering {
    title_sort_key(a)
        .cmp(&title_sort_key(b))
        .then_with(|| a.cmp(b))
}

/// Lowercases a title and folds French diacritics onto their base letter, so
/// "Côte" sorts before "Cuisine" and "École" sorts with the other E titles
/// instead of after "Z".
fn title_sort_key(title: &str) -> String {
    let mut key = String::with_capacity(title.len());
    for c in title.chars().flat_map(char::to_lowercase) {
        match c {
            'à' | 'â' | 'ä' => key.push('a'),
            'ç' => key.push('c'),
            'é' | 'è' | 'ê' | 'ë' => key.push('e'),
            'î' | 'ï' => key.push('i'),
            'ô' | 'ö' => key.push('o'),
            'ù' | 'û' | 'ü' => key.push('u'),
            'ÿ' => key.push('y'),
            'œ' => key.push_str("oe"),
            'æ' => key.push_str("ae"),
            other => key.push(other),
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission_management::mission_store::MissionStore;
    use crate::mission_management::types::{MissionDraft, MissionStatus, MissionType};
    use crate::query::types::StatusFilter;
    use chrono::NaiveDate;

    fn draft(
        title: &str,
        description: &str,
        status: MissionStatus,
        start: (i32, u32, u32),
    ) -> MissionDraft {
        MissionDraft {
            reference: format!("MISSION-{}", title),
            title: title.to_string(),
            description: description.to_string(),
            mission_type: MissionType::OnSite,
            organization: title.to_string(),
            address: "Dakar".to_string(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            status,
            control_rationale: String::new(),
            decision_number: None,
            decision_date: None,
            team_members: vec![],
            objectives: vec![],
        }
    }

    fn scenario_store() -> MissionStore {
        let mut store = MissionStore::new();
        store.create_mission(draft(
            "Alpha Bank",
            "Mission de contrôle des processus",
            MissionStatus::Planned,
            (2024, 1, 10),
        ));
        store.create_mission(draft(
            "Beta Corp",
            "Contrôle suite à une plainte",
            MissionStatus::Completed,
            (2024, 2, 5),
        ));
        store
    }

    fn titles(missions: &[Mission]) -> Vec<&str> {
        missions.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn status_filter_keeps_exact_matches_only() {
        let store = scenario_store();
        let query = MissionQuery {
            status: StatusFilter::Only(MissionStatus::Planned),
            ..Default::default()
        };

        let result = select(store.missions(), &query);
        assert_eq!(titles(&result), vec!["Alpha Bank"]);
    }

    #[test]
    fn title_sort_ascending_orders_alphabetically() {
        let store = scenario_store();
        let query = MissionQuery {
            sort_field: SortField::Title,
            direction: SortDirection::Ascending,
            ..Default::default()
        };

        let result = select(store.missions(), &query);
        assert_eq!(titles(&result), vec!["Alpha Bank", "Beta Corp"]);
    }

    #[test]
    fn title_sort_folds_french_diacritics() {
        let mut store = MissionStore::new();
        store.create_mission(draft(
            "École primaire de Thiès",
            "",
            MissionStatus::Planned,
            (2024, 1, 1),
        ));
        store.create_mission(draft(
            "Cuisine centrale",
            "",
            MissionStatus::Planned,
            (2024, 1, 2),
        ));
        store.create_mission(draft(
            "Côte Ouest SARL",
            "",
            MissionStatus::Planned,
            (2024, 1, 3),
        ));

        let query = MissionQuery {
            sort_field: SortField::Title,
            direction: SortDirection::Ascending,
            ..Default::default()
        };
        let result = select(store.missions(), &query);

        // Bytewise, "ô" sorts after "u" and "É" after "Z"; the folded key
        // puts these where a French reader expects them.
        assert_eq!(
            titles(&result),
            vec!["Côte Ouest SARL", "Cuisine centrale", "École primaire de Thiès"]
        );
    }

    #[test]
    fn search_is_a_case_insensitive_substring_on_title_and_description() {
        let store = scenario_store();

        let by_title = select(
            store.missions(),
            &MissionQuery {
                search: "alpha".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(titles(&by_title), vec!["Alpha Bank"]);

        let by_description = select(
            store.missions(),
            &MissionQuery {
                search: "PLAINTE".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(titles(&by_description), vec!["Beta Corp"]);

        let no_match = select(
            store.missions(),
            &MissionQuery {
                search: "gamma".to_string(),
                ..Default::default()
            },
        );
        assert!(no_match.is_empty());
    }

    #[test]
    fn empty_query_returns_a_permutation_of_the_whole_collection() {
        let mut store = scenario_store();
        store.create_mission(draft(
            "Gamma SARL",
            "Contrôle en ligne",
            MissionStatus::Cancelled,
            (2024, 1, 1),
        ));

        let query = MissionQuery {
            sort_field: SortField::Title,
            direction: SortDirection::Ascending,
            ..Default::default()
        };
        let result = select(store.missions(), &query);

        assert_eq!(result.len(), store.len());
        let mut result_ids: Vec<_> = result.iter().map(|m| m.id).collect();
        let mut input_ids: Vec<_> = store.missions().iter().map(|m| m.id).collect();
        result_ids.sort();
        input_ids.sort();
        assert_eq!(result_ids, input_ids);
    }

    #[test]
    fn pipeline_is_idempotent() {
        let store = scenario_store();
        let query = MissionQuery {
            status: StatusFilter::Only(MissionStatus::Planned),
            search: "contrôle".to_string(),
            sort_field: SortField::Title,
            direction: SortDirection::Descending,
        };

        let once = select(store.missions(), &query);
        let twice = select(&once, &query);

        assert_eq!(titles(&once), titles(&twice));
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn equal_sort_keys_keep_input_order_in_both_directions() {
        let mut store = MissionStore::new();
        // Three missions starting the same day, distinguishable by reference
        let first = store.create_mission(draft("Same", "a", MissionStatus::Planned, (2024, 3, 1)));
        let second = store.create_mission(draft("Same", "b", MissionStatus::Planned, (2024, 3, 1)));
        let third = store.create_mission(draft("Same", "c", MissionStatus::Planned, (2024, 3, 1)));

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let result = select(
                store.missions(),
                &MissionQuery {
                    sort_field: SortField::StartDate,
                    direction,
                    ..Default::default()
                },
            );
            let ids: Vec<_> = result.iter().map(|m| m.id).collect();
            assert_eq!(ids, vec![first.id, second.id, third.id]);
        }
    }

    #[test]
    fn date_sort_descending_puts_most_recent_first() {
        let store = scenario_store();
        let result = select(store.missions(), &MissionQuery::default());
        assert_eq!(titles(&result), vec!["Beta Corp", "Alpha Bank"]);
    }
}
