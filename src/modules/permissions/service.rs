//! Session permission resolution.
//!
//! Derives the set of allowed permission keys for the current session from
//! two session-store slots, in priority order:
//!
//! 1. `userPermissions`: an explicit cached grant, either a JSON array of key
//!    names, or a JSON object mapping key name to boolean
//! 2. `userData`: the raw session payload cached at login; its first
//!    `access` entry (possibly itself a JSON-encoded string) is interpreted
//!    the same way and then promoted back into `userPermissions` for
//!    subsequent loads
//!
//! Resolution is pure apart from that one promotion write. It never fails:
//! malformed or absent slots degrade to the empty set with a logged
//! diagnostic, so a broken cache means no capabilities, not an error.

use classdesk_core::permissions::{PermissionKey, PermissionSet};
use classdesk_session::{SessionStore, slots};
use serde_json::Value;
use tracing::{debug, warn};

pub struct PermissionService;

impl PermissionService {
    /// Resolve the session's permission set from the store.
    ///
    /// The result is a snapshot: role-permission changes on the backend
    /// take effect only once the slots are rewritten on the next login.
    pub fn resolve(store: &dyn SessionStore) -> PermissionSet {
        if let Some(raw) = store.get(slots::USER_PERMISSIONS) {
            match serde_json::from_str::<Value>(&raw) {
                Ok(value) => {
                    if let Some(keys) = interpret_grants(&value) {
                        return PermissionSet::from_keys(keys);
                    }
                    debug!("userPermissions slot has an unusable shape, trying userData");
                }
                Err(err) => {
                    warn!(error = %err, "malformed userPermissions slot, trying userData");
                }
            }
        }

        Self::resolve_from_user_data(store).unwrap_or_else(PermissionSet::empty)
    }

    /// Fallback path: interpret the first `access` entry of the cached raw
    /// session payload, promoting the result into the `userPermissions`
    /// slot so later loads take the fast path.
    fn resolve_from_user_data(store: &dyn SessionStore) -> Option<PermissionSet> {
        let raw = store.get(slots::USER_DATA)?;
        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "malformed userData slot");
                return None;
            }
        };

        let entry = value.get("access")?.as_array()?.first()?;

        // The access entry is sometimes double-encoded as a JSON string.
        let decoded;
        let entry = match entry {
            Value::String(inner) => match serde_json::from_str::<Value>(inner) {
                Ok(value) => {
                    decoded = value;
                    &decoded
                }
                Err(err) => {
                    warn!(error = %err, "access entry is not valid JSON");
                    return None;
                }
            },
            other => other,
        };

        let keys = interpret_grants(entry)?;

        if let Ok(json) = serde_json::to_string(&keys) {
            store.set(slots::USER_PERMISSIONS, &json);
            debug!(count = keys.len(), "promoted access grants into userPermissions");
        }

        Some(PermissionSet::from_keys(keys))
    }
}

/// O(1) membership check against the resolved set.
pub fn has_permission(set: &PermissionSet, key: PermissionKey) -> bool {
    set.contains(key)
}

/// Interpret a grants value into key names.
///
/// Lists yield their non-empty string entries (falsy and non-string
/// entries dropped); objects yield the keys whose value is boolean `true`
/// strictly. Any other shape is unusable.
fn interpret_grants(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|entry| match entry {
                    Value::String(name) if !name.is_empty() => Some(name.clone()),
                    _ => None,
                })
                .collect(),
        ),
        Value::Object(map) => Some(
            map.iter()
                .filter(|(_, granted)| matches!(granted, Value::Bool(true)))
                .map(|(name, _)| name.clone())
                .collect(),
        ),
        _ => None,
    }
}
