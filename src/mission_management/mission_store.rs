use crate::error_handling::types::StoreError;
use crate::mission_management::types::{
    Finding, FindingDraft, Mission, MissionDraft, MissionUpdate, Remark, Sanction, SanctionDraft,
};
use chrono::Utc;
use log::{debug, info};
use uuid::Uuid;

/// Sole owner of the mission collection.
///
/// The store holds every mission of the current console session in memory.
/// All mutation goes through its operations; readers get clones or shared
/// slices, so a value handed out earlier is never changed behind the
/// caller's back.
///
/// State lives for the lifetime of the session and is discarded on exit.
#[derive(Debug, Default)]
pub struct MissionStore {
    missions: Vec<Mission>,
}

impl MissionStore {
    pub fn new() -> Self {
        Self {
            missions: Vec::new(),
        }
    }

    /// Build a store pre-populated with a seed collection.
    pub fn with_missions(missions: Vec<Mission>) -> Self {
        Self { missions }
    }

    /// Read access to the current collection, in insertion order.
    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn len(&self) -> usize {
        self.missions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Mission> {
        self.missions.iter().find(|m| m.id == id)
    }

    /// Creates a mission from a draft and appends it to the collection.
    ///
    /// The store assigns a fresh identifier, empty child lists and sets both
    /// timestamps to the current time. Input is not validated here; required
    /// text fields are the presentation layer's contract.
    pub fn create_mission(&mut self, draft: MissionDraft) -> Mission {
        let now = Utc::now();
        let mission = Mission {
            id: Uuid::new_v4(),
            reference: draft.reference,
            title: draft.title,
            description: draft.description,
            mission_type: draft.mission_type,
            organization: draft.organization,
            address: draft.address,
            start_date: draft.start_date,
            end_date: draft.end_date,
            status: draft.status,
            control_rationale: draft.control_rationale,
            decision_number: draft.decision_number,
            decision_date: draft.decision_date,
            team_members: draft.team_members,
            objectives: draft.objectives,
            remarks: Vec::new(),
            sanctions: Vec::new(),
            findings: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        info!("created mission {} ({})", mission.reference, mission.id);
        self.missions.push(mission.clone());
        mission
    }

    /// Merges the non-`None` fields of `update` into the mission matching
    /// `id` and refreshes its `updated_at`.
    pub fn update_mission(&mut self, id: Uuid, update: MissionUpdate) -> Result<Mission, StoreError> {
        let mission = self.find_mut(id)?;

        if let Some(reference) = update.reference {
            mission.reference = reference;
        }
        if let Some(title) = update.title {
            mission.title = title;
        }
        if let Some(description) = update.description {
            mission.description = description;
        }
        if let Some(mission_type) = update.mission_type {
            mission.mission_type = mission_type;
        }
        if let Some(organization) = update.organization {
            mission.organization = organization;
        }
        if let Some(address) = update.address {
            mission.address = address;
        }
        if let Some(start_date) = update.start_date {
            mission.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            mission.end_date = end_date;
        }
        if let Some(status) = update.status {
            mission.status = status;
        }
        if let Some(control_rationale) = update.control_rationale {
            mission.control_rationale = control_rationale;
        }
        if let Some(decision_number) = update.decision_number {
            mission.decision_number = Some(decision_number);
        }
        if let Some(decision_date) = update.decision_date {
            mission.decision_date = Some(decision_date);
        }
        if let Some(team_members) = update.team_members {
            mission.team_members = team_members;
        }
        if let Some(objectives) = update.objectives {
            mission.objectives = objectives;
        }
        mission.updated_at = Utc::now();

        debug!("updated mission {}", id);
        Ok(mission.clone())
    }

    /// Removes the mission and, through ownership, every attached remark,
    /// sanction and finding. Returns the removed mission.
    pub fn delete_mission(&mut self, id: Uuid) -> Result<Mission, StoreError> {
        let position = self
            .missions
            .iter()
            .position(|m| m.id == id)
            .ok_or(StoreError::MissionNotFound(id))?;
        let removed = self.missions.remove(position);
        info!("deleted mission {} ({})", removed.reference, removed.id);
        Ok(removed)
    }

    /// Appends a free-text remark to the mission matching `mission_id`.
    pub fn append_remark(&mut self, mission_id: Uuid, content: String) -> Result<Remark, StoreError> {
        let now = Utc::now();
        let remark = Remark {
            id: Uuid::new_v4(),
            mission_id,
            content,
            created_at: now,
            updated_at: now,
        };

        let mission = self.find_mut(mission_id)?;
        mission.remarks.push(remark.clone());
        mission.updated_at = now;
        debug!("appended remark {} to mission {}", remark.id, mission_id);
        Ok(remark)
    }

    /// Appends a sanction to the mission matching `mission_id`.
    pub fn append_sanction(
        &mut self,
        mission_id: Uuid,
        draft: SanctionDraft,
    ) -> Result<Sanction, StoreError> {
        let now = Utc::now();
        let sanction = Sanction {
            id: Uuid::new_v4(),
            mission_id,
            sanction_type: draft.sanction_type,
            description: draft.description,
            amount: draft.amount,
            decision_date: draft.decision_date,
            created_at: now,
            updated_at: now,
        };

        let mission = self.find_mut(mission_id)?;
        mission.sanctions.push(sanction.clone());
        mission.updated_at = now;
        debug!("appended sanction {} to mission {}", sanction.id, mission_id);
        Ok(sanction)
    }

    /// Appends a finding to the mission matching `mission_id`.
    pub fn append_finding(
        &mut self,
        mission_id: Uuid,
        draft: FindingDraft,
    ) -> Result<Finding, StoreError> {
        let now = Utc::now();
        let finding = Finding {
            id: Uuid::new_v4(),
            mission_id,
            finding_type: draft.finding_type,
            description: draft.description,
            legal_reference: draft.legal_reference,
            recommendation: draft.recommendation,
            correction_delay_days: draft.correction_delay_days,
            observed_on: draft.observed_on,
            created_at: now,
            updated_at: now,
        };

        let mission = self.find_mut(mission_id)?;
        mission.findings.push(finding.clone());
        mission.updated_at = now;
        debug!("appended finding {} to mission {}", finding.id, mission_id);
        Ok(finding)
    }

    fn find_mut(&mut self, id: Uuid) -> Result<&mut Mission, StoreError> {
        self.missions
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(StoreError::MissionNotFound(id))
    }
}
