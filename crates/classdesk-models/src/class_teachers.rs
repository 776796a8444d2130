//! Class-teacher assignment rows.

use serde::{Deserialize, Serialize};

/// One teacher-to-class assignment as the class-management views render it.
///
/// Produced both by the class-teacher listing and by the teachers-for-a-
/// grade-and-class lookup used when assigning marks submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassTeacherRecord {
    pub id: String,
    pub name: String,
    pub staff_no: String,
    pub grade: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub subject: String,
    pub medium: String,
}
