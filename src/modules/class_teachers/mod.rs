pub mod model;
pub mod service;

pub use model::ClassTeacherRecord;
pub use service::ClassTeacherService;
