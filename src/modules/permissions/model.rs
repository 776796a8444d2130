//! Permission types.
//!
//! This module re-exports the permission types from the `classdesk-core`
//! crate so feature code can import them alongside the service.

pub use classdesk_core::permissions::{PermissionKey, PermissionSet};
