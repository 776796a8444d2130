pub mod model;
pub mod service;

pub use model::{PermissionKey, PermissionSet};
pub use service::{PermissionService, has_permission};
