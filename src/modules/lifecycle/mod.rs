pub mod error;
pub mod proxy_client;
pub mod service;
pub mod state;
pub mod templates;

pub use error::LifecycleError;
pub use proxy_client::ProxyClient;
pub use service::{GeneratedVideo, GenerationLifecycle, Studio};
pub use state::{JobProgress, JobState};
