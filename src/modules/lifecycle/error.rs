use crate::modules::project::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error("Please enter a topic or script.")]
    EmptyScript,
    #[error("{0}")]
    InvalidRequest(String),
    #[error("A video generation is already in progress.")]
    AlreadyInProgress,
    #[error("Could not reach the server: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{0}")]
    Server(String),
    #[error("Invalid server response: {0}")]
    InvalidResponse(String),
    #[error("Server response did not include a video URL.")]
    MissingVideoUrl,
    #[error(transparent)]
    Store(#[from] StoreError),
}
