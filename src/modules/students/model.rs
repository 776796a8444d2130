//! Student view models.
//!
//! This module re-exports student records from the `classdesk-models`
//! crate for use alongside the service.

pub use classdesk_models::students::StudentRecord;
