//! # Classdesk Session
//!
//! Session-store abstraction for the Classdesk dashboard.
//!
//! In the browser the session lives in local storage; here it is an
//! explicitly-injected [`SessionStore`] so the permission resolver and the
//! API client can be exercised without a DOM. This crate provides:
//!
//! - The [`SessionStore`] trait: a string key/value store holding opaque
//!   JSON blobs
//! - [`MemoryStore`]: a thread-safe in-memory implementation
//! - [`slots`]: the well-known slot names shared across the application
//!
//! # Example
//!
//! ```ignore
//! use classdesk_session::{MemoryStore, SessionStore, slots};
//!
//! let store = MemoryStore::new();
//! store.set(slots::AUTH_TOKEN, "\"abc123\"");
//! assert!(store.get(slots::AUTH_TOKEN).is_some());
//! ```

pub mod slots;
pub mod store;

pub use store::{MemoryStore, SessionStore};
