//! Teacher model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Name;
use crate::traits::{Identified, List};

/// A teacher record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Clever teacher ID.
    pub id: String,

    #[serde(default)]
    pub district: Option<String>,

    #[serde(default)]
    pub school: Option<String>,

    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub schools: Vec<String>,

    #[serde(default)]
    pub name: Option<Name>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub sis_id: Option<String>,

    #[serde(default)]
    pub state_id: Option<String>,

    #[serde(default)]
    pub teacher_number: Option<String>,

    #[serde(default)]
    pub created: Option<DateTime<Utc>>,

    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,

    /// Remaining attributes, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identified for Teacher {
    fn id(&self) -> &str {
        &self.id
    }
}

impl List for Teacher {
    const COLLECTION: &'static str = "teachers";
}
