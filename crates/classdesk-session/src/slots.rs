//! Well-known session store slot names.
//!
//! Slot names match the keys the dashboard historically used in browser
//! local storage, so a store backed by an exported browser session reads
//! without translation.

/// Cached permission grants: a JSON array of key names, or a JSON object
/// mapping key name to boolean.
pub const USER_PERMISSIONS: &str = "userPermissions";

/// Raw user/session payload cached at login; its first `access` entry is
/// the fallback source for permission resolution.
pub const USER_DATA: &str = "userData";

/// Bearer token attached to API requests.
pub const AUTH_TOKEN: &str = "token";
