pub mod model;
pub mod service;

pub use model::StudentRecord;
pub use service::StudentService;
