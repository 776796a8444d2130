//! Teacher view models.
//!
//! This module re-exports teacher records from the `classdesk-models`
//! crate for use alongside the service.

pub use classdesk_models::teachers::{TeacherAssignment, TeacherRecord};
