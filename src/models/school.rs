//! School model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::traits::{Identified, List};

/// A school within a district.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct School {
    /// Clever school ID.
    pub id: String,

    /// Owning district ID.
    #[serde(default)]
    pub district: Option<String>,

    /// School name.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub school_number: Option<String>,

    #[serde(default)]
    pub sis_id: Option<String>,

    #[serde(default)]
    pub state_id: Option<String>,

    #[serde(default)]
    pub nces_id: Option<String>,

    /// Lowest grade taught, e.g. "Kindergarten" or "6".
    #[serde(default)]
    pub low_grade: Option<String>,

    /// Highest grade taught.
    #[serde(default)]
    pub high_grade: Option<String>,

    #[serde(default)]
    pub principal: Option<Principal>,

    #[serde(default)]
    pub created: Option<DateTime<Utc>>,

    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,

    /// Remaining attributes, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A school's principal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Principal {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Identified for School {
    fn id(&self) -> &str {
        &self.id
    }
}

impl List for School {
    const COLLECTION: &'static str = "schools";
}
