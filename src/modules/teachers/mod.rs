pub mod model;
pub mod service;

pub use model::{TeacherAssignment, TeacherRecord};
pub use service::TeacherService;
