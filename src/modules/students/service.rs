//! Student list fetch and normalization.

use crate::client::{ApiClient, ClientError};
use crate::modules::students::model::StudentRecord;
use classdesk_core::json;
use serde_json::Value;
use tracing::instrument;

pub struct StudentService;

impl StudentService {
    #[instrument(skip(client))]
    pub async fn list(client: &ApiClient) -> Result<Vec<StudentRecord>, ClientError> {
        let raw = client.get_json("/api/students").await?;
        Ok(Self::normalize(&raw))
    }

    /// Normalize a raw student list response.
    ///
    /// Total over any input: non-list responses yield an empty vector and
    /// malformed elements coerce to all-default records.
    pub fn normalize(raw: &Value) -> Vec<StudentRecord> {
        json::rows(raw)
            .iter()
            .enumerate()
            .map(|(index, row)| Self::normalize_row(row, index))
            .collect()
    }

    fn normalize_row(row: &Value, index: usize) -> StudentRecord {
        // Academic fields come from a nested student object when present,
        // else from flat fields on the record.
        let nested = json::first_present(row, &["student", "student_data", "studentData"]);
        let academic = |nested_keys: &[&str], flat_keys: &[&str]| {
            nested
                .map(|detail| json::text(detail, nested_keys))
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| json::text(row, flat_keys))
        };

        let admission_no = academic(
            &["admissionNo", "admission_no", "admissionNumber"],
            &["admissionNo", "admission_no", "admissionNumber"],
        );

        StudentRecord {
            id: json::stable_id(row, &admission_no, index),
            name: json::text(row, &["name", "fullName"]),
            username: json::text(row, &["username", "userName"]),
            email: json::text(row, &["email"]),
            status: json::text(row, &["status"]),
            contact: json::text(row, &["contact", "contactNo", "phone"]),
            gender: json::text(row, &["gender"]),
            photo: json::text(row, &["photo", "image"]),
            role: json::text(row, &["role", "userType"]),
            grade: academic(&["grade"], &["grade", "studentGrade"]),
            class_name: academic(&["class", "className"], &["class", "studentClass", "className"]),
            medium: academic(&["medium"], &["medium", "studentMedium"]),
            admission_no,
        }
    }
}
