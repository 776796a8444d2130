//! # Classdesk
//!
//! Session, permission-gating, and view-model layer for the Classdesk
//! school dashboard.
//!
//! ## Overview
//!
//! The dashboard proper is a thin set of pages over a REST backend: fetch
//! data, render a table, submit a form. This crate holds everything under
//! those pages that is worth testing without a browser:
//!
//! - **Permission resolution**: deriving the set of allowed capabilities
//!   for the current session from locally cached authorization data
//! - **Response normalization**: coercing the several inconsistent JSON
//!   shapes the backend returns for students, teachers, class-teacher
//!   assignments, and parents into flat, predictable records
//! - **API client**: authenticated JSON fetches feeding the normalizers
//!
//! ## Architecture
//!
//! The codebase follows a modular architecture:
//!
//! ```text
//! src/
//! ├── client.rs           # Authenticated HTTP JSON client
//! ├── config/             # Configuration loaded from environment
//! ├── logging.rs          # Console tracing setup
//! ├── modules/            # Feature modules
//! │   ├── permissions/    # Session permission resolution
//! │   ├── students/       # Student list normalization
//! │   ├── teachers/       # Teacher list + assignment normalization
//! │   ├── class_teachers/ # Per-class assignment rows
//! │   └── parents/        # Parent list normalization
//! └── state.rs            # Shared application state
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `model.rs`: View-model records (re-exported from `classdesk-models`)
//! - `service.rs`: Fetch and normalization logic
//!
//! ## Failure semantics
//!
//! The resolver and every normalizer are total: malformed cache slots
//! resolve to the empty permission set, malformed responses normalize to
//! empty or all-default records, and neither ever returns an error. Only
//! the network call itself (see [`client`]) is fallible.

pub mod client;
pub mod config;
pub mod logging;
pub mod modules;
pub mod state;

// Re-export workspace crates for convenience
pub use classdesk_core;
pub use classdesk_models;
pub use classdesk_session;
