//! Seed dataset for the console session.
//!
//! The mission collection is seeded once at startup, either from the
//! embedded dataset or from a JSON file named in the configuration, and is
//! discarded when the session ends. Mutations are never written back.

use crate::error_handling::types::SeedError;
use crate::mission_management::types::Mission;
use std::fs;
use std::path::Path;

const BUILTIN_DATASET: &str = include_str!("seed/missions.json");

/// Deserializes the embedded dataset shipped with the binary.
pub fn builtin_missions() -> Result<Vec<Mission>, SeedError> {
    Ok(serde_json::from_str(BUILTIN_DATASET)?)
}

/// Loads a seed collection from a JSON file with the same shape as the
/// embedded dataset.
pub fn missions_from_file(path: &Path) -> Result<Vec<Mission>, SeedError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission_management::types::{MissionStatus, MissionType};
    use std::io::Write;

    #[test]
    fn builtin_dataset_parses() {
        let missions = builtin_missions().unwrap();
        assert_eq!(missions.len(), 2);

        let first = &missions[0];
        assert_eq!(first.reference, "MISSION-2024-001");
        assert_eq!(first.status, MissionStatus::Planned);
        assert_eq!(first.mission_type, MissionType::OnSite);
        assert_eq!(first.decision_number.as_deref(), Some("DEC-2024-001"));
        assert_eq!(first.team_members.len(), 2);
        assert_eq!(first.objectives.len(), 3);
        assert!(first.remarks.is_empty());
        assert!(first.sanctions.is_empty());
        assert!(first.findings.is_empty());

        let second = &missions[1];
        assert_eq!(second.status, MissionStatus::InProgress);
        assert_eq!(second.mission_type, MissionType::DocumentBased);
        assert!(second.decision_number.is_none());
    }

    #[test]
    fn file_dataset_parses_like_the_builtin_one() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BUILTIN_DATASET.as_bytes()).unwrap();

        let missions = missions_from_file(file.path()).unwrap();
        assert_eq!(missions.len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = missions_from_file(Path::new("/nonexistent/missions.json")).unwrap_err();
        assert!(matches!(err, SeedError::IoError(_)));
    }
}
