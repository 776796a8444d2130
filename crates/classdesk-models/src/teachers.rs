//! Teacher view-model records.

use serde::{Deserialize, Serialize};

/// One teaching assignment: what a teacher teaches, where.
///
/// The backend sends assignments as a single object, an array, or nested
/// under varying container keys; normalization coerces every variant into
/// a list of these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherAssignment {
    pub staff_no: String,
    pub grade: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub subject: String,
    pub medium: String,
}

/// A teacher row as the list views render it.
///
/// The flat display fields (`grade`, `class_name`, `subject`, `medium`)
/// are the comma-joined unique values across [`assignments`]; the full
/// assignment list is retained for the edit form.
///
/// [`assignments`]: TeacherRecord::assignments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherRecord {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub status: String,
    pub contact: String,
    pub gender: String,
    pub photo: String,
    pub role: String,
    pub staff_no: String,
    pub grade: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub subject: String,
    pub medium: String,
    pub assignments: Vec<TeacherAssignment>,
}
