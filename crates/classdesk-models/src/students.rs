//! Student view-model records.

use serde::{Deserialize, Serialize};

/// A student row as the list views render it.
///
/// Academic fields (grade, class, medium, admission number) are sourced
/// from a nested `student` object when the backend sends one, else from
/// flat fields on the raw record. Missing data is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub status: String,
    pub contact: String,
    pub gender: String,
    pub photo: String,
    pub role: String,
    pub grade: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub medium: String,
    pub admission_no: String,
}
