use crate::modules::generation::model::{GenerationRequest, VideoStyle, VoiceOption};

/// Ready-made starting point for a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub style: VideoStyle,
    pub voice: VoiceOption,
    pub script_placeholder: &'static str,
}

pub const TEMPLATES: [VideoTemplate; 4] = [
    VideoTemplate {
        name: "Product Demo",
        description: "Showcase your product's features and benefits.",
        style: VideoStyle::Corporate,
        voice: VoiceOption::ProfessionalMale,
        script_placeholder: "[Product Name] helps [target audience] solve [problem].\n\n\
Feature 1: [Describe a key feature and its benefit].\n\n\
Feature 2: [Describe another feature].\n\n\
Get started today at [Your Website]!",
    },
    VideoTemplate {
        name: "Whiteboard Explainer",
        description: "Break down complex topics in a simple, engaging way.",
        style: VideoStyle::Whiteboard,
        voice: VoiceOption::FriendlyFemale,
        script_placeholder: "Topic: [Your Complex Topic]\n\n\
1. Introduction: What is [Topic]?\n\n\
2. How it works: [Explain the process step-by-step].\n\n\
3. Why it matters: [Explain its importance or application].",
    },
    VideoTemplate {
        name: "Animated Story",
        description: "Tell a captivating story with fun 3D animations.",
        style: VideoStyle::Animated3d,
        voice: VoiceOption::UpbeatFemale,
        script_placeholder: "Once upon a time, [character] faced a challenge: [the challenge].\n\n\
But then, they discovered [a solution or a new idea].\n\n\
Now, [character] can [achieve a positive outcome].",
    },
    VideoTemplate {
        name: "Infographic Teaser",
        description: "Present key stats and data in a visually appealing video.",
        style: VideoStyle::Infographic,
        voice: VoiceOption::FriendlyFemale,
        script_placeholder: "Did you know that [surprising statistic]?\n\n\
Our research also shows [another key data point].\n\n\
And finally, [a third important fact].\n\n\
Download our full report to learn more.",
    },
];

/// Case-insensitive lookup by template name.
pub fn find_template(name: &str) -> Option<&'static VideoTemplate> {
    let wanted = name.trim();
    TEMPLATES
        .iter()
        .find(|template| template.name.eq_ignore_ascii_case(wanted))
}

impl VideoTemplate {
    pub fn to_request(&self) -> GenerationRequest {
        GenerationRequest::new(self.script_placeholder)
            .with_style(self.style)
            .with_voice(self.voice)
    }
}
