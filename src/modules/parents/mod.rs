pub mod model;
pub mod service;

pub use model::{ParentEntry, ParentRecord};
pub use service::ParentService;
