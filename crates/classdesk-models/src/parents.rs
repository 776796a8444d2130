//! Parent view-model records.

use serde::{Deserialize, Serialize};

/// One parent entry: the relation to a student plus contact details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentEntry {
    pub relation: String,
    pub profession: String,
    pub contact: String,
    pub admission_no: String,
}

/// A parent row as the list views render it.
///
/// The first entry's fields are promoted to the flat display fields; the
/// full entry list is retained for the edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentRecord {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub status: String,
    pub contact: String,
    pub gender: String,
    pub photo: String,
    pub role: String,
    pub relation: String,
    pub profession: String,
    pub admission_no: String,
    pub entries: Vec<ParentEntry>,
}
