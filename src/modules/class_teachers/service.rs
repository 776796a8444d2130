//! Class-teacher assignment fetch and normalization.
//!
//! Two endpoints feed the same row shape: the class-teacher listing on the
//! class-management page, and the teachers-for-a-grade-and-class lookup
//! used by the marks-submission tracker. Rows arrive either flat or with
//! the teacher nested under a `teacher` key.

use crate::client::{ApiClient, ClientError};
use crate::modules::class_teachers::model::ClassTeacherRecord;
use classdesk_core::json;
use serde_json::Value;
use tracing::instrument;

pub struct ClassTeacherService;

impl ClassTeacherService {
    #[instrument(skip(client))]
    pub async fn list(client: &ApiClient) -> Result<Vec<ClassTeacherRecord>, ClientError> {
        let raw = client.get_json("/api/class-teachers").await?;
        Ok(Self::normalize(&raw))
    }

    #[instrument(skip(client))]
    pub async fn for_class(
        client: &ApiClient,
        grade: &str,
        class_name: &str,
    ) -> Result<Vec<ClassTeacherRecord>, ClientError> {
        let raw = client
            .get_json(&format!(
                "/api/teachers/by-class?grade={grade}&class={class_name}"
            ))
            .await?;
        Ok(Self::normalize(&raw))
    }

    /// Normalize a raw class-teacher response.
    ///
    /// Total over any input: non-list responses yield an empty vector and
    /// malformed elements coerce to all-default records.
    pub fn normalize(raw: &Value) -> Vec<ClassTeacherRecord> {
        json::rows(raw)
            .iter()
            .enumerate()
            .map(|(index, row)| Self::normalize_row(row, index))
            .collect()
    }

    fn normalize_row(row: &Value, index: usize) -> ClassTeacherRecord {
        let teacher = json::first_present(row, &["teacher", "teacher_data"]).unwrap_or(row);

        let mut staff_no = json::text(teacher, &["staffNo", "staff_no"]);
        if staff_no.is_empty() {
            staff_no = json::text(row, &["staffNo", "staff_no"]);
        }

        let mut name = json::text(teacher, &["name", "fullName"]);
        if name.is_empty() {
            name = json::text(row, &["name", "teacherName"]);
        }

        ClassTeacherRecord {
            id: json::stable_id(row, &staff_no, index),
            name,
            staff_no,
            grade: json::text(row, &["grade", "teacherGrade"]),
            class_name: json::text(row, &["class", "teacherClass", "className"]),
            subject: json::text(row, &["subject", "teacherSubject"]),
            medium: json::text(row, &["medium"]),
        }
    }
}
