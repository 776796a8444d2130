//! # Classdesk Core
//!
//! Core types and helpers shared by the Classdesk dashboard crates.
//!
//! This crate provides foundational pieces used throughout the application:
//!
//! - [`permissions`]: the closed set of gate-able UI capabilities and the
//!   per-session set of granted keys
//! - [`json`]: total, never-panicking helpers for probing the loosely-shaped
//!   JSON the backend returns
//!
//! # Example
//!
//! ```ignore
//! use classdesk_core::permissions::{PermissionKey, PermissionSet};
//!
//! let set = PermissionSet::from_keys(["addMarks".to_string()]);
//!
//! if set.contains(PermissionKey::AddMarks) {
//!     // Show the marks-entry page
//! }
//! ```

pub mod json;
pub mod permissions;

// Re-export commonly used types at crate root
pub use permissions::{PermissionKey, PermissionSet};
