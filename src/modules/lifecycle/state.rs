use std::fmt;

use serde::Serialize;

pub const MSG_PREPARING: &str = "Preparing your video request...";
pub const MSG_SENDING: &str = "Sending your script to our secure server...";
pub const MSG_GENERATING: &str =
    "Backend is now generating your video. This may take a few minutes...";
pub const MSG_ALMOST_READY: &str = "Your video is almost ready...";
pub const MSG_READY: &str = "Video is ready!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    #[default]
    Idle,
    Submitting,
    Polling,
    Ready,
    Failed,
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            JobState::Idle => "idle",
            JobState::Submitting => "submitting",
            JobState::Polling => "polling",
            JobState::Ready => "ready",
            JobState::Failed => "failed",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobProgress {
    pub state: JobState,
    pub message: String,
}

impl JobProgress {
    pub fn new(state: JobState, message: &str) -> Self {
        Self {
            state,
            message: message.to_string(),
        }
    }
}
