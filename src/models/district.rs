//! District model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::traits::{Identified, List};

/// A Clever district.
///
/// Districts are listed with a single unpaginated request; a district token
/// only ever sees its own district.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct District {
    /// Clever district ID.
    pub id: String,

    /// District name.
    #[serde(default)]
    pub name: Option<String>,

    /// MDR number.
    #[serde(default)]
    pub mdr_number: Option<String>,

    /// NCES identifier.
    #[serde(default)]
    pub nces_id: Option<String>,

    /// State the district is in.
    #[serde(default)]
    pub state: Option<String>,

    /// Remaining attributes, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identified for District {
    fn id(&self) -> &str {
        &self.id
    }
}

impl List for District {
    const COLLECTION: &'static str = "districts";
    const PAGINATED: bool = false;
}
