//! Section model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::traits::{Identified, List};

/// A class section linking a teacher roster to a student roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Clever section ID.
    pub id: String,

    #[serde(default)]
    pub district: Option<String>,

    #[serde(default)]
    pub school: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub subject: Option<String>,

    #[serde(default)]
    pub grade: Option<String>,

    #[serde(default)]
    pub period: Option<String>,

    #[serde(default)]
    pub course_name: Option<String>,

    #[serde(default)]
    pub course_number: Option<String>,

    #[serde(default)]
    pub section_number: Option<String>,

    #[serde(default)]
    pub sis_id: Option<String>,

    /// Primary teacher ID.
    #[serde(default)]
    pub teacher: Option<String>,

    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub teachers: Vec<String>,

    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub students: Vec<String>,

    #[serde(default)]
    pub created: Option<DateTime<Utc>>,

    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,

    /// Remaining attributes, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identified for Section {
    fn id(&self) -> &str {
        &self.id
    }
}

impl List for Section {
    const COLLECTION: &'static str = "sections";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_rosters_are_empty() {
        let json = r#"{"id": "sec1", "teacher": "t1", "students": null, "teachers": null}"#;

        let section: Section = serde_json::from_str(json).unwrap();
        assert_eq!(section.id(), "sec1");
        assert!(section.students.is_empty());
        assert!(section.teachers.is_empty());
    }

    #[test]
    fn test_missing_rosters_are_empty() {
        let section: Section = serde_json::from_str(r#"{"id": "sec1"}"#).unwrap();
        assert!(section.students.is_empty());
        assert!(section.teachers.is_empty());
    }
}
