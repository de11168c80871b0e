//! District and school administrator models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Name;
use crate::traits::{Identified, List};

/// An administrator with district-wide access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistrictAdmin {
    pub id: String,

    #[serde(default)]
    pub district: Option<String>,

    #[serde(default)]
    pub name: Option<Name>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identified for DistrictAdmin {
    fn id(&self) -> &str {
        &self.id
    }
}

impl List for DistrictAdmin {
    const COLLECTION: &'static str = "district_admins";
}

/// An administrator scoped to one or more schools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolAdmin {
    pub id: String,

    #[serde(default)]
    pub district: Option<String>,

    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub schools: Vec<String>,

    #[serde(default)]
    pub name: Option<Name>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub staff_id: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identified for SchoolAdmin {
    fn id(&self) -> &str {
        &self.id
    }
}

impl List for SchoolAdmin {
    const COLLECTION: &'static str = "school_admins";
}
