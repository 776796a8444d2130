//! Class-teacher view models.
//!
//! This module re-exports class-teacher records from the
//! `classdesk-models` crate for use alongside the service.

pub use classdesk_models::class_teachers::ClassTeacherRecord;
