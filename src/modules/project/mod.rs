pub mod model;
pub mod repository;
pub mod service;

pub use model::VideoProject;
pub use repository::{JsonFileStore, MemoryStore, ProjectStore, StoreError};
pub use service::ProjectService;
