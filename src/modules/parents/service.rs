//! Parent list fetch and normalization.
//!
//! A parent record carries one entry per linked student (relation,
//! profession, contact, admission number). Entries use the same
//! scalar-or-array coercion as teacher assignments; the first entry's
//! fields are promoted to the flat display fields and the full list is
//! retained for the edit form.

use crate::client::{ApiClient, ClientError};
use crate::modules::parents::model::{ParentEntry, ParentRecord};
use classdesk_core::json;
use serde_json::Value;
use tracing::instrument;

pub struct ParentService;

impl ParentService {
    #[instrument(skip(client))]
    pub async fn list(client: &ApiClient) -> Result<Vec<ParentRecord>, ClientError> {
        let raw = client.get_json("/api/parents").await?;
        Ok(Self::normalize(&raw))
    }

    /// Normalize a raw parent list response.
    ///
    /// Total over any input: non-list responses yield an empty vector and
    /// malformed elements coerce to all-default records.
    pub fn normalize(raw: &Value) -> Vec<ParentRecord> {
        json::rows(raw)
            .iter()
            .enumerate()
            .map(|(index, row)| Self::normalize_row(row, index))
            .collect()
    }

    fn normalize_row(row: &Value, index: usize) -> ParentRecord {
        let entries = Self::entries_of(row);
        let first = entries.first().cloned().unwrap_or_default();

        let mut contact = json::text(row, &["contact", "contactNo", "phone"]);
        if contact.is_empty() {
            contact = first.contact.clone();
        }

        ParentRecord {
            id: json::stable_id(row, &first.admission_no, index),
            name: json::text(row, &["name", "fullName"]),
            username: json::text(row, &["username", "userName"]),
            email: json::text(row, &["email"]),
            status: json::text(row, &["status"]),
            contact,
            gender: json::text(row, &["gender"]),
            photo: json::text(row, &["photo", "image"]),
            role: json::text(row, &["role", "userType"]),
            relation: first.relation,
            profession: first.profession,
            admission_no: first.admission_no,
            entries,
        }
    }

    /// Coerce the entry data of a raw parent record into a list.
    fn entries_of(row: &Value) -> Vec<ParentEntry> {
        let container = json::first_present(row, &["parentData", "parent_data", "entries"]);
        let elements = json::coerce_list(container);
        if !elements.is_empty() {
            return elements.into_iter().map(Self::entry_of).collect();
        }

        // No container: the entry fields sit flat on the record.
        let flat = Self::entry_of(row);
        if flat == ParentEntry::default() {
            Vec::new()
        } else {
            vec![flat]
        }
    }

    fn entry_of(element: &Value) -> ParentEntry {
        ParentEntry {
            relation: json::text(element, &["relation", "relationship"]),
            profession: json::text(element, &["profession", "occupation"]),
            contact: json::text(element, &["contact", "contactNo", "phone"]),
            admission_no: json::text(
                element,
                &["admissionNo", "admission_no", "studentAdmissionNo"],
            ),
        }
    }
}
