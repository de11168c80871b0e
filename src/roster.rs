//! Roster snapshots.

use crate::client::CleverClient;
use crate::error::Result;
use crate::models::{District, DistrictAdmin, School, SchoolAdmin, Section, Student, Teacher};
use crate::traits::List;

/// Every collection one app can see for a district, fetched at one point in
/// time.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub districts: Vec<District>,
    pub schools: Vec<School>,
    pub students: Vec<Student>,
    pub teachers: Vec<Teacher>,
    pub district_admins: Vec<DistrictAdmin>,
    pub school_admins: Vec<SchoolAdmin>,
    pub sections: Vec<Section>,
}

impl Roster {
    /// Fetch all collections, one after another.
    ///
    /// Paginated collections are requested `limit` records at a time.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error; no partial roster is produced.
    #[tracing::instrument(skip(client))]
    pub async fn fetch(client: &CleverClient, limit: u32) -> Result<Self> {
        let roster = Self {
            districts: District::list_all(client, limit).await?,
            schools: School::list_all(client, limit).await?,
            students: Student::list_all(client, limit).await?,
            teachers: Teacher::list_all(client, limit).await?,
            district_admins: DistrictAdmin::list_all(client, limit).await?,
            school_admins: SchoolAdmin::list_all(client, limit).await?,
            sections: Section::list_all(client, limit).await?,
        };

        tracing::info!(counts = ?roster.counts(), "roster fetched");
        Ok(roster)
    }

    /// Name of the district, taken from the last district that has one.
    pub fn district_name(&self) -> Option<&str> {
        self.districts.iter().rev().find_map(|d| d.name.as_deref())
    }

    /// Record counts per collection, in fetch order.
    pub fn counts(&self) -> [(&'static str, usize); 7] {
        [
            (District::COLLECTION, self.districts.len()),
            (School::COLLECTION, self.schools.len()),
            (Student::COLLECTION, self.students.len()),
            (Teacher::COLLECTION, self.teachers.len()),
            (DistrictAdmin::COLLECTION, self.district_admins.len()),
            (SchoolAdmin::COLLECTION, self.school_admins.len()),
            (Section::COLLECTION, self.sections.len()),
        ]
    }
}
