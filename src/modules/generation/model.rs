use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const MIN_DURATION_SECS: u32 = 15;
pub const MAX_DURATION_SECS: u32 = 120;
pub const DEFAULT_DURATION_SECS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum VideoStyle {
    #[default]
    Minimalist,
    Whiteboard,
    Corporate,
    #[serde(rename = "Animated 3D")]
    Animated3d,
    Infographic,
    Storybook,
}

impl VideoStyle {
    pub const ALL: [VideoStyle; 6] = [
        VideoStyle::Minimalist,
        VideoStyle::Whiteboard,
        VideoStyle::Corporate,
        VideoStyle::Animated3d,
        VideoStyle::Infographic,
        VideoStyle::Storybook,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VideoStyle::Minimalist => "Minimalist",
            VideoStyle::Whiteboard => "Whiteboard",
            VideoStyle::Corporate => "Corporate",
            VideoStyle::Animated3d => "Animated 3D",
            VideoStyle::Infographic => "Infographic",
            VideoStyle::Storybook => "Storybook",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum VoiceOption {
    #[default]
    #[serde(rename = "Professional Male")]
    ProfessionalMale,
    #[serde(rename = "Friendly Female")]
    FriendlyFemale,
    #[serde(rename = "Deep Male Narrator")]
    DeepNarrator,
    #[serde(rename = "Upbeat Female")]
    UpbeatFemale,
}

impl VoiceOption {
    pub const ALL: [VoiceOption; 4] = [
        VoiceOption::ProfessionalMale,
        VoiceOption::FriendlyFemale,
        VoiceOption::DeepNarrator,
        VoiceOption::UpbeatFemale,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VoiceOption::ProfessionalMale => "Professional Male",
            VoiceOption::FriendlyFemale => "Friendly Female",
            VoiceOption::DeepNarrator => "Deep Male Narrator",
            VoiceOption::UpbeatFemale => "Upbeat Female",
        }
    }
}

impl fmt::Display for VideoStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for VoiceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Matches "Animated 3D", "animated-3d" and "animated3d" alike.
fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for VideoStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        VideoStyle::ALL
            .into_iter()
            .find(|style| normalize(style.label()) == wanted)
            .ok_or_else(|| format!("Unknown video style: {}", s))
    }
}

impl FromStr for VoiceOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        VoiceOption::ALL
            .into_iter()
            .find(|voice| normalize(voice.label()) == wanted)
            .ok_or_else(|| format!("Unknown voice option: {}", s))
    }
}

/// Everything the user picked for one generation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub script: String,
    pub style: VideoStyle,
    pub voice: VoiceOption,
    #[validate(range(
        min = 15,
        max = 120,
        message = "Duration must be between 15 and 120 seconds."
    ))]
    pub duration: u32,
}

impl GenerationRequest {
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            style: VideoStyle::default(),
            voice: VoiceOption::default(),
            duration: DEFAULT_DURATION_SECS,
        }
    }

    pub fn with_style(mut self, style: VideoStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_voice(mut self, voice: VoiceOption) -> Self {
        self.voice = voice;
        self
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }
}
