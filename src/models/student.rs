//! Student model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Name;
use crate::traits::{Identified, List};

/// A student record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Clever student ID.
    pub id: String,

    /// Owning district ID.
    #[serde(default)]
    pub district: Option<String>,

    /// Primary school ID.
    #[serde(default)]
    pub school: Option<String>,

    /// Every school the student is enrolled in.
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub schools: Vec<String>,

    #[serde(default)]
    pub name: Option<Name>,

    #[serde(default)]
    pub email: Option<String>,

    /// Grade level as reported by the SIS.
    #[serde(default)]
    pub grade: Option<String>,

    /// Date of birth, in the SIS's own format.
    #[serde(default)]
    pub dob: Option<String>,

    #[serde(default)]
    pub sis_id: Option<String>,

    #[serde(default)]
    pub state_id: Option<String>,

    #[serde(default)]
    pub student_number: Option<String>,

    #[serde(default)]
    pub created: Option<DateTime<Utc>>,

    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,

    /// Remaining attributes, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identified for Student {
    fn id(&self) -> &str {
        &self.id
    }
}

impl List for Student {
    const COLLECTION: &'static str = "students";
}
