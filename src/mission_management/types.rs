use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a control mission.
///
/// Serialized values follow the authority's dataset conventions, which is
/// also the wire format of the seed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionStatus {
    #[serde(rename = "PLANIFIEE")]
    Planned,
    #[serde(rename = "EN_COURS")]
    InProgress,
    #[serde(rename = "TERMINEE")]
    Completed,
    #[serde(rename = "ANNULEE")]
    Cancelled,
}

impl MissionStatus {
    pub const ALL: [MissionStatus; 4] = [
        MissionStatus::Planned,
        MissionStatus::InProgress,
        MissionStatus::Completed,
        MissionStatus::Cancelled,
    ];

    /// Display label used by the console views.
    pub fn label(&self) -> &'static str {
        match self {
            MissionStatus::Planned => "Planifiée",
            MissionStatus::InProgress => "En cours",
            MissionStatus::Completed => "Terminée",
            MissionStatus::Cancelled => "Annulée",
        }
    }

    /// Wire/keyword form, as accepted by console commands.
    pub fn keyword(&self) -> &'static str {
        match self {
            MissionStatus::Planned => "PLANIFIEE",
            MissionStatus::InProgress => "EN_COURS",
            MissionStatus::Completed => "TERMINEE",
            MissionStatus::Cancelled => "ANNULEE",
        }
    }

    pub fn parse(input: &str) -> Option<MissionStatus> {
        let normalized = input.trim().to_uppercase();
        MissionStatus::ALL
            .iter()
            .copied()
            .find(|s| s.keyword() == normalized)
    }
}

/// How the control is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionType {
    #[serde(rename = "Contrôle sur place")]
    OnSite,
    #[serde(rename = "Contrôle sur pièces")]
    DocumentBased,
    #[serde(rename = "Contrôle en ligne")]
    Online,
}

impl MissionType {
    pub fn label(&self) -> &'static str {
        match self {
            MissionType::OnSite => "Contrôle sur place",
            MissionType::DocumentBased => "Contrôle sur pièces",
            MissionType::Online => "Contrôle en ligne",
        }
    }

    pub fn parse(input: &str) -> Option<MissionType> {
        match input.trim().to_lowercase().as_str() {
            "place" | "sur place" | "contrôle sur place" => Some(MissionType::OnSite),
            "pieces" | "pièces" | "sur pièces" | "contrôle sur pièces" => {
                Some(MissionType::DocumentBased)
            }
            "ligne" | "en ligne" | "contrôle en ligne" => Some(MissionType::Online),
            _ => None,
        }
    }
}

/// Disciplinary measure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SanctionType {
    #[serde(rename = "AVERTISSEMENT")]
    Warning,
    #[serde(rename = "MISE_EN_DEMEURE")]
    FormalNotice,
    #[serde(rename = "AMENDE")]
    Fine,
    #[serde(rename = "INJONCTION")]
    Injunction,
    #[serde(rename = "RESTRICTION_TRAITEMENT")]
    ProcessingRestriction,
}

impl SanctionType {
    pub fn label(&self) -> &'static str {
        match self {
            SanctionType::Warning => "Avertissement",
            SanctionType::FormalNotice => "Mise en demeure",
            SanctionType::Fine => "Amende",
            SanctionType::Injunction => "Injonction",
            SanctionType::ProcessingRestriction => "Restriction de traitement",
        }
    }

    pub fn parse(input: &str) -> Option<SanctionType> {
        match input.trim().to_uppercase().as_str() {
            "AVERTISSEMENT" => Some(SanctionType::Warning),
            "MISE_EN_DEMEURE" => Some(SanctionType::FormalNotice),
            "AMENDE" => Some(SanctionType::Fine),
            "INJONCTION" => Some(SanctionType::Injunction),
            "RESTRICTION_TRAITEMENT" => Some(SanctionType::ProcessingRestriction),
            _ => None,
        }
    }
}

/// Compliance observation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingType {
    #[serde(rename = "NON_CONFORMITE_MAJEURE")]
    MajorNoncompliance,
    #[serde(rename = "NON_CONFORMITE_MINEURE")]
    MinorNoncompliance,
    #[serde(rename = "OBSERVATION")]
    Observation,
    #[serde(rename = "POINT_CONFORME")]
    ConformantPoint,
}

impl FindingType {
    pub fn label(&self) -> &'static str {
        match self {
            FindingType::MajorNoncompliance => "Non-conformité majeure",
            FindingType::MinorNoncompliance => "Non-conformité mineure",
            FindingType::Observation => "Observation",
            FindingType::ConformantPoint => "Point conforme",
        }
    }

    pub fn parse(input: &str) -> Option<FindingType> {
        match input.trim().to_uppercase().as_str() {
            "NON_CONFORMITE_MAJEURE" | "MAJEURE" => Some(FindingType::MajorNoncompliance),
            "NON_CONFORMITE_MINEURE" | "MINEURE" => Some(FindingType::MinorNoncompliance),
            "OBSERVATION" => Some(FindingType::Observation),
            "POINT_CONFORME" | "CONFORME" => Some(FindingType::ConformantPoint),
            _ => None,
        }
    }
}

/// Free-text note attached to a mission. Remarks are append-only: they are
/// never edited after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Remark {
    pub id: Uuid,
    pub mission_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Disciplinary action issued as an outcome of a mission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sanction {
    pub id: Uuid,
    pub mission_id: Uuid,
    #[serde(rename = "type")]
    pub sanction_type: SanctionType,
    pub description: String,
    /// Monetary amount in FCFA. Optional: warnings and injunctions usually
    /// carry none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub decision_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Compliance observation recorded during a mission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub id: Uuid,
    pub mission_id: Uuid,
    #[serde(rename = "type")]
    pub finding_type: FindingType,
    pub description: String,
    #[serde(rename = "reference_legale", skip_serializing_if = "Option::is_none")]
    pub legal_reference: Option<String>,
    #[serde(rename = "recommandation", skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    /// Number of days granted to correct the issue.
    #[serde(rename = "delai_correction", skip_serializing_if = "Option::is_none")]
    pub correction_delay_days: Option<u32>,
    #[serde(rename = "date_constat")]
    pub observed_on: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A control engagement conducted by the authority against an organization.
///
/// # Fields Overview
///
/// - identity: `id`, assigned at creation and never reassigned
/// - descriptive attributes: `reference`, `title`, `description`,
///   `mission_type`, `organization`, `address`, `control_rationale`
/// - schedule: `start_date` / `end_date` (the system does not enforce
///   `start_date <= end_date`)
/// - decision paperwork: `decision_number` / `decision_date`, both optional
/// - `team_members` and `objectives` keep their input order
/// - children: `remarks`, `sanctions`, `findings`, owned by the mission and
///   destroyed with it
/// - `created_at` / `updated_at`; `updated_at` is refreshed on every mutation
///   of the mission or of any of its children
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    pub id: Uuid,
    pub reference: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type_mission")]
    pub mission_type: MissionType,
    pub organization: String,
    pub address: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: MissionStatus,
    #[serde(rename = "motif_controle")]
    pub control_rationale: String,
    #[serde(rename = "decision_numero", skip_serializing_if = "Option::is_none")]
    pub decision_number: Option<String>,
    #[serde(rename = "date_decision", skip_serializing_if = "Option::is_none")]
    pub decision_date: Option<NaiveDate>,
    pub team_members: Vec<String>,
    pub objectives: Vec<String>,
    #[serde(default)]
    pub remarks: Vec<Remark>,
    #[serde(default)]
    pub sanctions: Vec<Sanction>,
    #[serde(default)]
    pub findings: Vec<Finding>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for `MissionStore::create_mission`. The store assigns identity,
/// child lists and timestamps; everything else comes from the caller, already
/// validated by the presentation layer.
#[derive(Debug, Clone)]
pub struct MissionDraft {
    pub reference: String,
    pub title: String,
    pub description: String,
    pub mission_type: MissionType,
    pub organization: String,
    pub address: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: MissionStatus,
    pub control_rationale: String,
    pub decision_number: Option<String>,
    pub decision_date: Option<NaiveDate>,
    pub team_members: Vec<String>,
    pub objectives: Vec<String>,
}

/// Partial update for `MissionStore::update_mission`. `None` fields are left
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct MissionUpdate {
    pub reference: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub mission_type: Option<MissionType>,
    pub organization: Option<String>,
    pub address: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<MissionStatus>,
    pub control_rationale: Option<String>,
    pub decision_number: Option<String>,
    pub decision_date: Option<NaiveDate>,
    pub team_members: Option<Vec<String>>,
    pub objectives: Option<Vec<String>>,
}

/// Input for `MissionStore::append_sanction`.
#[derive(Debug, Clone)]
pub struct SanctionDraft {
    pub sanction_type: SanctionType,
    pub description: String,
    pub amount: Option<f64>,
    pub decision_date: NaiveDate,
}

/// Input for `MissionStore::append_finding`.
#[derive(Debug, Clone)]
pub struct FindingDraft {
    pub finding_type: FindingType,
    pub description: String,
    pub legal_reference: Option<String>,
    pub recommendation: Option<String>,
    pub correction_delay_days: Option<u32>,
    pub observed_on: NaiveDate,
}
