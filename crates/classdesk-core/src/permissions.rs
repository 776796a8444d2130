//! Permission keys and per-session permission sets.
//!
//! This module provides the centralized, closed set of permission keys used
//! across the codebase. Using the [`PermissionKey`] enum instead of string
//! literals ensures consistency and makes refactoring easier.
//!
//! A [`PermissionSet`] holds the keys granted to the current session. It is
//! resolved once per page load from the session store and is not invalidated
//! live; changes to role permissions take effect on the next load.
//!
//! # Example
//!
//! ```ignore
//! use classdesk_core::permissions::{PermissionKey, PermissionSet};
//!
//! if session_permissions.contains(PermissionKey::AddMarks) {
//!     // Render the marks-entry link
//! }
//!
//! if session_permissions.has("userManagement") {
//!     // Render the user-management link
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A gate-able UI capability.
///
/// The set is closed: keys arriving from the backend that are not listed
/// here are retained in the raw [`PermissionSet`] but never match a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PermissionKey {
    /// Landing dashboard with summary widgets
    Dashboard,
    /// Enter marks for a class/subject
    AddMarks,
    /// Approve submitted marks
    ApproveMarks,
    /// Manage student/teacher/parent accounts
    UserManagement,
    /// Edit role-to-permission assignments
    RolePermissions,
    /// View and export report pages
    Reports,
    /// Promote students between academic years
    StudentPromotion,
    /// Manage grades and classes
    ClassManagement,
    /// Manage subjects
    SubjectManagement,
    /// Track marks-submission status per class
    MarksTracking,
}

impl PermissionKey {
    /// Every key in the closed set, in display order.
    pub const ALL: [PermissionKey; 10] = [
        PermissionKey::Dashboard,
        PermissionKey::AddMarks,
        PermissionKey::ApproveMarks,
        PermissionKey::UserManagement,
        PermissionKey::RolePermissions,
        PermissionKey::Reports,
        PermissionKey::StudentPromotion,
        PermissionKey::ClassManagement,
        PermissionKey::SubjectManagement,
        PermissionKey::MarksTracking,
    ];

    /// The camelCase wire name used in cached permission data.
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionKey::Dashboard => "dashboard",
            PermissionKey::AddMarks => "addMarks",
            PermissionKey::ApproveMarks => "approveMarks",
            PermissionKey::UserManagement => "userManagement",
            PermissionKey::RolePermissions => "rolePermissions",
            PermissionKey::Reports => "reports",
            PermissionKey::StudentPromotion => "studentPromotion",
            PermissionKey::ClassManagement => "classManagement",
            PermissionKey::SubjectManagement => "subjectManagement",
            PermissionKey::MarksTracking => "marksTracking",
        }
    }

    /// Parse a wire name against the closed set. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<PermissionKey> {
        PermissionKey::ALL.iter().copied().find(|k| k.as_str() == name)
    }
}

/// The permission keys granted to the current session.
///
/// Granted keys are stored as raw wire strings: unknown keys from the
/// backend survive resolution and round-trip back into the session store
/// unchanged, but are filtered out when checked against the closed
/// [`PermissionKey`] set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    granted: HashSet<String>,
}

impl PermissionSet {
    /// An empty set: no capability is granted (fail closed).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from raw wire names, collapsing duplicates and dropping
    /// empty entries.
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let granted = keys.into_iter().filter(|k| !k.is_empty()).collect();
        Self { granted }
    }

    /// O(1) membership test for a key in the closed set.
    pub fn contains(&self, key: PermissionKey) -> bool {
        self.granted.contains(key.as_str())
    }

    /// Membership test by wire name. Names outside the closed set are always
    /// `false`, even when present in the raw granted data.
    pub fn has(&self, name: &str) -> bool {
        PermissionKey::parse(name).is_some_and(|key| self.contains(key))
    }

    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }

    pub fn len(&self) -> usize {
        self.granted.len()
    }

    /// The raw granted wire names, unknown keys included.
    pub fn raw_keys(&self) -> impl Iterator<Item = &str> {
        self.granted.iter().map(String::as_str)
    }
}
