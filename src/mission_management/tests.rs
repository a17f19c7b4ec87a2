use crate::error_handling::types::StoreError;
use crate::mission_management::mission_store::MissionStore;
use crate::mission_management::types::{
    FindingDraft, FindingType, MissionDraft, MissionStatus, MissionType, MissionUpdate,
    SanctionDraft, SanctionType,
};
use chrono::NaiveDate;
use std::collections::HashSet;

// Helper to create a minimal valid draft
fn draft(title: &str) -> MissionDraft {
    MissionDraft {
        reference: format!("MISSION-2024-{}", title),
        title: title.to_string(),
        description: format!("Contrôle de {}", title),
        mission_type: MissionType::OnSite,
        organization: format!("{} SA", title),
        address: "Dakar".to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 3, 25).unwrap(),
        status: MissionStatus::Planned,
        control_rationale: "Plan annuel".to_string(),
        decision_number: None,
        decision_date: None,
        team_members: vec!["Amadou Diallo".to_string(), "Fatou Sow".to_string()],
        objectives: vec!["Vérification des registres".to_string()],
    }
}

fn sanction_draft(sanction_type: SanctionType, amount: Option<f64>) -> SanctionDraft {
    SanctionDraft {
        sanction_type,
        description: "late filing".to_string(),
        amount,
        decision_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
    }
}

fn finding_draft() -> FindingDraft {
    FindingDraft {
        finding_type: FindingType::MinorNoncompliance,
        description: "Registre incomplet".to_string(),
        legal_reference: Some("Art. 49".to_string()),
        recommendation: None,
        correction_delay_days: Some(30),
        observed_on: NaiveDate::from_ymd_opt(2024, 3, 21).unwrap(),
    }
}

#[test]
fn create_mission_assigns_identity_and_empty_children() {
    let mut store = MissionStore::new();
    let mission = store.create_mission(draft("Alpha"));

    assert_eq!(store.len(), 1);
    assert!(mission.remarks.is_empty());
    assert!(mission.sanctions.is_empty());
    assert!(mission.findings.is_empty());
    assert_eq!(mission.created_at, mission.updated_at);
    assert_eq!(store.get(mission.id).unwrap().title, "Alpha");
}

#[test]
fn collection_length_tracks_creation_count() {
    let mut store = MissionStore::new();
    for i in 0..25 {
        store.create_mission(draft(&format!("m{}", i)));
        assert_eq!(store.len(), i + 1);
    }
}

#[test]
fn mission_identifiers_never_collide() {
    let mut store = MissionStore::new();
    let mut seen = HashSet::new();
    for i in 0..10_000 {
        let mission = store.create_mission(draft(&format!("m{}", i)));
        assert!(seen.insert(mission.id), "duplicate mission id generated");
    }
    assert_eq!(store.len(), 10_000);
}

#[test]
fn update_mission_merges_partial_fields() {
    let mut store = MissionStore::new();
    let created = store.create_mission(draft("Alpha"));

    let updated = store
        .update_mission(
            created.id,
            MissionUpdate {
                status: Some(MissionStatus::InProgress),
                address: Some("Thiès".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.status, MissionStatus::InProgress);
    assert_eq!(updated.address, "Thiès");
    // Untouched fields survive the merge
    assert_eq!(updated.title, "Alpha");
    assert_eq!(updated.reference, created.reference);
    assert!(updated.updated_at >= created.updated_at);
}

#[test]
fn update_unknown_mission_is_an_explicit_not_found() {
    let mut store = MissionStore::new();
    store.create_mission(draft("Alpha"));
    let unknown = uuid::Uuid::new_v4();

    let result = store.update_mission(unknown, MissionUpdate::default());
    assert_eq!(result.unwrap_err(), StoreError::MissionNotFound(unknown));
    assert_eq!(store.len(), 1);
}

#[test]
fn delete_mission_cascades_to_children() {
    let mut store = MissionStore::new();
    let mission = store.create_mission(draft("Alpha"));
    store
        .append_remark(mission.id, "à suivre".to_string())
        .unwrap();
    store
        .append_sanction(mission.id, sanction_draft(SanctionType::Warning, None))
        .unwrap();

    let removed = store.delete_mission(mission.id).unwrap();
    assert_eq!(removed.remarks.len(), 1);
    assert_eq!(removed.sanctions.len(), 1);
    assert!(store.is_empty());
    assert!(store.get(mission.id).is_none());
}

#[test]
fn operations_after_delete_never_recreate_the_mission() {
    let mut store = MissionStore::new();
    let mission = store.create_mission(draft("Alpha"));
    store.delete_mission(mission.id).unwrap();

    let not_found = StoreError::MissionNotFound(mission.id);
    assert_eq!(
        store
            .update_mission(mission.id, MissionUpdate::default())
            .unwrap_err(),
        not_found
    );
    assert_eq!(
        store
            .append_remark(mission.id, "trop tard".to_string())
            .unwrap_err(),
        not_found
    );
    assert_eq!(
        store
            .append_sanction(mission.id, sanction_draft(SanctionType::Fine, Some(500_000.0)))
            .unwrap_err(),
        not_found
    );
    assert_eq!(
        store.append_finding(mission.id, finding_draft()).unwrap_err(),
        not_found
    );
    assert!(store.is_empty());
}

#[test]
fn delete_unknown_mission_is_an_explicit_not_found() {
    let mut store = MissionStore::new();
    let unknown = uuid::Uuid::new_v4();
    assert_eq!(
        store.delete_mission(unknown).unwrap_err(),
        StoreError::MissionNotFound(unknown)
    );
}

#[test]
fn append_remark_grows_list_and_bumps_parent() {
    let mut store = MissionStore::new();
    let mission = store.create_mission(draft("Alpha"));
    let before = store.get(mission.id).unwrap().updated_at;

    let remark = store
        .append_remark(mission.id, "premier constat".to_string())
        .unwrap();

    let parent = store.get(mission.id).unwrap();
    assert_eq!(parent.remarks.len(), 1);
    assert_eq!(parent.remarks[0].id, remark.id);
    assert_eq!(remark.mission_id, mission.id);
    assert!(parent.updated_at >= before);
}

#[test]
fn append_sanction_grows_list_by_exactly_one() {
    let mut store = MissionStore::new();
    let mission = store.create_mission(draft("Alpha"));

    for count in 1..=3 {
        store
            .append_sanction(mission.id, sanction_draft(SanctionType::FormalNotice, None))
            .unwrap();
        assert_eq!(store.get(mission.id).unwrap().sanctions.len(), count);
    }
}

#[test]
fn sanction_without_amount_stays_without_amount() {
    let mut store = MissionStore::new();
    let mission = store.create_mission(draft("X"));

    let sanction = store
        .append_sanction(mission.id, sanction_draft(SanctionType::Fine, None))
        .unwrap();

    let parent = store.get(mission.id).unwrap();
    assert_eq!(parent.sanctions.len(), 1);
    assert_eq!(parent.sanctions[0].sanction_type, SanctionType::Fine);
    assert!(sanction.amount.is_none());
    assert!(parent.sanctions[0].amount.is_none());
}

#[test]
fn append_finding_keeps_optional_fields() {
    let mut store = MissionStore::new();
    let mission = store.create_mission(draft("Alpha"));
    let before = store.get(mission.id).unwrap().updated_at;

    let finding = store.append_finding(mission.id, finding_draft()).unwrap();

    let parent = store.get(mission.id).unwrap();
    assert_eq!(parent.findings.len(), 1);
    assert_eq!(finding.legal_reference.as_deref(), Some("Art. 49"));
    assert!(finding.recommendation.is_none());
    assert_eq!(finding.correction_delay_days, Some(30));
    assert!(parent.updated_at >= before);
}

#[test]
fn snapshots_handed_out_are_not_mutated_afterwards() {
    let mut store = MissionStore::new();
    let snapshot = store.create_mission(draft("Alpha"));

    store
        .update_mission(
            snapshot.id,
            MissionUpdate {
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    // The clone returned at creation time is a stable snapshot
    assert_eq!(snapshot.title, "Alpha");
    assert_eq!(store.get(snapshot.id).unwrap().title, "Renamed");
}

#[test]
fn status_parsing_roundtrip() {
    for status in MissionStatus::ALL {
        assert_eq!(MissionStatus::parse(status.keyword()), Some(status));
    }
    assert_eq!(MissionStatus::parse("planifiee"), Some(MissionStatus::Planned));
    assert_eq!(MissionStatus::parse("inconnu"), None);
}
