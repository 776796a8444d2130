//! Teacher list fetch and normalization.
//!
//! Teacher records carry one or more teaching assignments. The backend
//! sends them as a single object, an array, or nested under varying
//! container keys; some endpoints skip the container entirely and put the
//! assignment fields flat on the record. All variants coerce to the same
//! `Vec<TeacherAssignment>`, and the flat display fields are the
//! comma-joined unique values across assignments.

use crate::client::{ApiClient, ClientError};
use crate::modules::teachers::model::{TeacherAssignment, TeacherRecord};
use classdesk_core::json;
use serde_json::Value;
use tracing::instrument;

pub struct TeacherService;

impl TeacherService {
    #[instrument(skip(client))]
    pub async fn list(client: &ApiClient) -> Result<Vec<TeacherRecord>, ClientError> {
        let raw = client.get_json("/api/teachers").await?;
        Ok(Self::normalize(&raw))
    }

    /// Normalize a raw teacher list response.
    ///
    /// Total over any input: non-list responses yield an empty vector and
    /// malformed elements coerce to all-default records.
    pub fn normalize(raw: &Value) -> Vec<TeacherRecord> {
        json::rows(raw)
            .iter()
            .enumerate()
            .map(|(index, row)| Self::normalize_row(row, index))
            .collect()
    }

    fn normalize_row(row: &Value, index: usize) -> TeacherRecord {
        let assignments = Self::assignments_of(row);

        let staff_no = {
            let flat = json::text(row, &["staffNo", "staff_no"]);
            if flat.is_empty() {
                assignments
                    .first()
                    .map(|a| a.staff_no.clone())
                    .unwrap_or_default()
            } else {
                flat
            }
        };

        TeacherRecord {
            id: json::stable_id(row, &staff_no, index),
            name: json::text(row, &["name", "fullName"]),
            username: json::text(row, &["username", "userName"]),
            email: json::text(row, &["email"]),
            status: json::text(row, &["status"]),
            contact: json::text(row, &["contact", "contactNo", "phone"]),
            gender: json::text(row, &["gender"]),
            photo: json::text(row, &["photo", "image"]),
            role: json::text(row, &["role", "userType"]),
            staff_no,
            grade: json::join_unique(assignments.iter().map(|a| a.grade.clone())),
            class_name: json::join_unique(assignments.iter().map(|a| a.class_name.clone())),
            subject: json::join_unique(assignments.iter().map(|a| a.subject.clone())),
            medium: json::join_unique(assignments.iter().map(|a| a.medium.clone())),
            assignments,
        }
    }

    /// Coerce the assignment data of a raw teacher record into a list.
    fn assignments_of(row: &Value) -> Vec<TeacherAssignment> {
        let container = json::first_present(row, &["assignments", "teacherData", "teacher_data"]);
        let elements = json::coerce_list(container);
        if !elements.is_empty() {
            return elements
                .into_iter()
                .map(|element| Self::assignment_of(element, row))
                .collect();
        }

        // No container: the assignment fields sit flat on the record.
        let flat = Self::assignment_of(row, row);
        if flat == TeacherAssignment::default() {
            Vec::new()
        } else {
            vec![flat]
        }
    }

    /// Build one assignment, inheriting the record-level staff number when
    /// the element has none of its own.
    fn assignment_of(element: &Value, record: &Value) -> TeacherAssignment {
        let mut staff_no = json::text(element, &["staffNo", "staff_no"]);
        if staff_no.is_empty() {
            staff_no = json::text(record, &["staffNo", "staff_no"]);
        }

        TeacherAssignment {
            staff_no,
            grade: json::text(element, &["grade", "teacherGrade"]),
            class_name: json::text(element, &["class", "teacherClass", "className"]),
            subject: json::text(element, &["subject", "teacherSubject"]),
            medium: json::text(element, &["medium"]),
        }
    }
}
