//! Feature modules.
//!
//! One module per dashboard concern. Each follows the same structure:
//! `model.rs` re-exports the view-model records, `service.rs` holds the
//! fetch and normalization logic.

pub mod class_teachers;
pub mod parents;
pub mod permissions;
pub mod students;
pub mod teachers;
