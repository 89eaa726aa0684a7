use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::error::GenerationError;
use crate::infrastructure::provider::{Operation, VideoProvider};

/// Source of delay between status checks.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[derive(Debug)]
pub enum PollState {
    Submitted(Operation),
    Pending(Operation),
    Done(String),
    Errored(GenerationError),
}

/// Drives one provider operation from submission to a download link.
pub struct OperationPoller<'a> {
    provider: &'a dyn VideoProvider,
    sleeper: &'a dyn Sleeper,
    interval: Duration,
    max_polls: Option<u32>,
}

impl<'a> OperationPoller<'a> {
    pub fn new(
        provider: &'a dyn VideoProvider,
        sleeper: &'a dyn Sleeper,
        interval: Duration,
        max_polls: Option<u32>,
    ) -> Self {
        Self {
            provider,
            sleeper,
            interval,
            max_polls,
        }
    }

    /// Submits `prompt` and polls until the operation settles.
    ///
    /// Neither the submission nor a failed status check is retried.
    pub async fn run(&self, prompt: &str) -> Result<String, GenerationError> {
        let mut state = match self.provider.submit(prompt).await {
            Ok(operation) => PollState::Submitted(operation),
            Err(e) => PollState::Errored(e.into()),
        };
        let mut polls: u32 = 0;

        loop {
            state = match state {
                PollState::Done(link) => return Ok(link),
                PollState::Errored(err) => return Err(err),
                PollState::Submitted(operation) | PollState::Pending(operation) => {
                    if operation.done {
                        Self::settle(operation)
                    } else if self.max_polls.is_some_and(|max| polls >= max) {
                        warn!("Giving up on operation {} after {} polls", operation.name, polls);
                        PollState::Errored(GenerationError::PollLimitExceeded(polls))
                    } else {
                        self.sleeper.sleep(self.interval).await;
                        polls += 1;
                        debug!("Checking operation {} (poll {})", operation.name, polls);
                        match self.provider.refresh(&operation).await {
                            Ok(next) => PollState::Pending(next),
                            Err(e) => PollState::Errored(e.into()),
                        }
                    }
                }
            };
        }
    }

    fn settle(operation: Operation) -> PollState {
        if let Some(error) = operation.error {
            let message = if error.message.trim().is_empty() {
                "Video generation failed.".to_string()
            } else {
                error.message
            };
            return PollState::Errored(GenerationError::OperationFailed(message));
        }

        match operation.download_link() {
            Some(link) => {
                info!("Operation {} finished", operation.name);
                PollState::Done(link.to_string())
            }
            None => PollState::Errored(GenerationError::MissingDownloadLink),
        }
    }
}
