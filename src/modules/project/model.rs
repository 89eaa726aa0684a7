use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::modules::generation::model::{GenerationRequest, VideoStyle, VoiceOption};

const TITLE_MAX_CHARS: usize = 40;
const THUMBNAIL_SIZE: &str = "400/225";
const PREVIEW_SIZE: &str = "1280/720";

/// A finished generation, as kept in the project store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoProject {
    pub id: String,
    pub title: String,
    pub script: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub video_url: String,
    pub thumbnail_url: String,
    pub style: VideoStyle,
    pub voice: VoiceOption,
    pub duration: u32,
}

impl VideoProject {
    pub fn new(
        id: String,
        request: &GenerationRequest,
        video_url: String,
        thumbnail_url: String,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            title: title_from_script(&request.script),
            script: request.script.clone(),
            created_at,
            video_url,
            thumbnail_url,
            style: request.style,
            voice: request.voice,
            duration: request.duration,
        }
    }

    /// Larger rendition of the thumbnail for the preview view.
    pub fn preview_image_url(&self) -> String {
        self.thumbnail_url.replace(THUMBNAIL_SIZE, PREVIEW_SIZE)
    }
}

pub fn new_project_id() -> String {
    format!("proj_{}", Uuid::new_v4().simple())
}

/// First 40 characters of the script, with an ellipsis when cut short.
pub fn title_from_script(script: &str) -> String {
    let script = script.trim();
    let mut chars = script.char_indices();
    match chars.nth(TITLE_MAX_CHARS) {
        Some((cut, _)) => format!("{}...", script[..cut].trim_end()),
        None => script.to_string(),
    }
}

/// Placeholder still keyed by the creation time; the provider returns no thumbnail.
pub fn placeholder_thumbnail_url(base_url: &str, at: OffsetDateTime) -> String {
    let millis = at.unix_timestamp_nanos() / 1_000_000;
    format!(
        "{}/seed/{}/{}",
        base_url.trim_end_matches('/'),
        millis,
        THUMBNAIL_SIZE
    )
}
