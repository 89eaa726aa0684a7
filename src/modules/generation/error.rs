use axum::http::StatusCode;

use crate::infrastructure::provider::ProviderError;

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Script is required.")]
    MissingScript,
    #[error("{0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("{0}")]
    OperationFailed(String),
    #[error("Video generation failed to return a download link.")]
    MissingDownloadLink,
    #[error("Provider returned a malformed download link: {0}")]
    MalformedDownloadLink(String),
    #[error("Video generation did not finish after {0} status checks.")]
    PollLimitExceeded(u32),
}

impl GenerationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GenerationError::MissingScript | GenerationError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
