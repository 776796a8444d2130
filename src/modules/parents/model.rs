//! Parent view models.
//!
//! This module re-exports parent records from the `classdesk-models`
//! crate for use alongside the service.

pub use classdesk_models::parents::{ParentEntry, ParentRecord};
