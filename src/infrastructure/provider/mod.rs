use async_trait::async_trait;

pub mod client;
pub mod model;

pub use client::{GeminiVideoProvider, ProviderError};
pub use model::Operation;

/// A long-running video generation backend.
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// Starts a generation job for `prompt` and returns its operation handle.
    async fn submit(&self, prompt: &str) -> Result<Operation, ProviderError>;

    /// Re-reads the current state of a previously submitted operation.
    async fn refresh(&self, operation: &Operation) -> Result<Operation, ProviderError>;
}
