//! # Classdesk Models
//!
//! Flat view-model records produced from heterogeneous backend JSON.
//!
//! Every record here is the normalized output the table/grid views bind
//! to: all fields are `String`s defaulting to empty, so rendering never
//! needs a null check. The normalization services in the root crate are
//! the only producers.
//!
//! # Modules
//!
//! - [`students`]: student list records
//! - [`teachers`]: teacher records with flattened assignments
//! - [`class_teachers`]: per-class teacher assignment rows
//! - [`parents`]: parent records with child entries

pub mod class_teachers;
pub mod parents;
pub mod students;
pub mod teachers;
