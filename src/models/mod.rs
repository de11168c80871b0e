//! Clever roster model types.

use serde::{Deserialize, Deserializer};

mod admin;
mod district;
mod name;
mod school;
mod section;
mod student;
mod teacher;

pub use admin::*;
pub use district::*;
pub use name::*;
pub use school::*;
pub use section::*;
pub use student::*;
pub use teacher::*;

/// Decode a list that the API may send as `null`, treating `null` as empty.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
