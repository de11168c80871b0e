//! Roster comparison and the resulting discrepancy report.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};
use crate::roster::Roster;
use crate::traits::Identified;

/// Identifiers of `candidate` records that are absent from `reference`.
///
/// Keeps `candidate` order and does not de-duplicate.
pub fn missing_ids<R, C>(reference: &[R], candidate: &[C]) -> Vec<String>
where
    R: Identified,
    C: Identified,
{
    let known: HashSet<&str> = reference.iter().map(Identified::id).collect();
    candidate
        .iter()
        .map(Identified::id)
        .filter(|id| !known.contains(id))
        .map(str::to_string)
        .collect()
}

/// Students present in `candidate` but not in `reference`.
pub fn missing_students(reference: &Roster, candidate: &Roster) -> Vec<String> {
    missing_ids(&reference.students, &candidate.students)
}

/// Teachers present in `candidate` but not in `reference`.
pub fn missing_teachers(reference: &Roster, candidate: &Roster) -> Vec<String> {
    missing_ids(&reference.teachers, &candidate.teachers)
}

/// Schools present in `candidate` but not in `reference`.
pub fn missing_schools(reference: &Roster, candidate: &Roster) -> Vec<String> {
    missing_ids(&reference.schools, &candidate.schools)
}

/// Records one app sees for a district that the other does not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingReport {
    #[serde(rename = "DistrictName")]
    pub district_name: String,
    #[serde(rename = "DistrictCleverID")]
    pub district_id: String,
    #[serde(rename = "MissingStudentCleverIDs")]
    pub missing_students: Vec<String>,
    #[serde(rename = "MissingTeacherCleverIDs")]
    pub missing_teachers: Vec<String>,
    #[serde(rename = "MissingSchoolCleverIDs")]
    pub missing_schools: Vec<String>,
}

impl MissingReport {
    /// Compare two rosters of the same district.
    ///
    /// The district name is read from `candidate`.
    pub fn between(district_id: &str, reference: &Roster, candidate: &Roster) -> Self {
        Self {
            district_name: candidate.district_name().unwrap_or_default().to_string(),
            district_id: district_id.to_string(),
            missing_students: missing_students(reference, candidate),
            missing_teachers: missing_teachers(reference, candidate),
            missing_schools: missing_schools(reference, candidate),
        }
    }

    /// Returns true if neither roster is missing anything.
    pub fn is_empty(&self) -> bool {
        self.missing_students.is_empty()
            && self.missing_teachers.is_empty()
            && self.missing_schools.is_empty()
    }

    /// Write the report as `<district id>.json` inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidDistrictId`] if the ID would name a path
    /// outside `dir`, or an I/O error if the file cannot be written.
    pub fn write_json(&self, dir: &Path) -> Result<PathBuf> {
        let id = self.district_id.as_str();
        if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\']) {
            return Err(RosterError::InvalidDistrictId(id.to_string()));
        }

        let path = dir.join(format!("{id}.json"));
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{School, Student, Teacher};

    fn records<T: serde::de::DeserializeOwned>(ids: &[&str]) -> Vec<T> {
        ids.iter()
            .map(|id| serde_json::from_value(serde_json::json!({ "id": id })).unwrap())
            .collect()
    }

    fn roster(students: &[&str], teachers: &[&str], schools: &[&str]) -> Roster {
        Roster {
            students: records::<Student>(students),
            teachers: records::<Teacher>(teachers),
            schools: records::<School>(schools),
            ..Default::default()
        }
    }

    #[test]
    fn test_superset_reports_extra_ids() {
        let a = roster(&["s1", "s2"], &[], &[]);
        let b = roster(&["s1", "s9", "s2", "s10"], &[], &[]);
        assert_eq!(missing_students(&a, &b), vec!["s9", "s10"]);
    }

    #[test]
    fn test_equal_rosters_have_no_missing() {
        let a = roster(&["s1"], &["t1"], &["k1"]);
        let b = roster(&["s1"], &["t1"], &["k1"]);
        let report = MissingReport::between("d1", &a, &b);
        assert!(report.is_empty());
    }

    #[test]
    fn test_rosters_of_different_lengths() {
        // The candidate may be longer or shorter than the reference.
        let a = roster(&["s1", "s2", "s3"], &["t1"], &["k1", "k2", "k3", "k4"]);
        let b = roster(&["s4"], &["t1", "t2", "t3"], &["k5"]);
        let report = MissingReport::between("d1", &a, &b);
        assert_eq!(report.missing_students, vec!["s4"]);
        assert_eq!(report.missing_teachers, vec!["t2", "t3"]);
        assert_eq!(report.missing_schools, vec!["k5"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let a = roster(&[], &[], &[]);
        let b = roster(&["s1", "s1"], &[], &[]);
        assert_eq!(missing_students(&a, &b), vec!["s1", "s1"]);
    }

    #[test]
    fn test_records_only_in_reference_are_ignored() {
        let a = roster(&["s1", "s2"], &[], &[]);
        let b = roster(&["s1"], &[], &[]);
        assert!(missing_students(&a, &b).is_empty());
    }

    #[test]
    fn test_write_json_uses_district_id() {
        let dir = tempfile::tempdir().unwrap();
        let report = MissingReport {
            district_name: "Springfield".to_string(),
            district_id: "d123".to_string(),
            missing_students: vec!["s9".to_string()],
            ..Default::default()
        };

        let path = report.write_json(dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "d123.json");

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["DistrictName"], "Springfield");
        assert_eq!(written["DistrictCleverID"], "d123");
        assert_eq!(written["MissingStudentCleverIDs"][0], "s9");
        assert!(written["MissingSchoolCleverIDs"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_write_json_rejects_path_like_district_ids() {
        let dir = tempfile::tempdir().unwrap();
        let inner = dir.path().join("reports");
        std::fs::create_dir(&inner).unwrap();

        for id in ["../x", "a/b", "a\\b", "..", ".", ""] {
            let report = MissingReport {
                district_id: id.to_string(),
                ..Default::default()
            };
            let err = report.write_json(&inner).unwrap_err();
            assert!(
                matches!(err, RosterError::InvalidDistrictId(ref rejected) if rejected == id),
                "{id:?} gave {err:?}"
            );
        }

        assert!(!dir.path().join("x.json").exists());
        assert_eq!(std::fs::read_dir(&inner).unwrap().count(), 0);
    }
}
