use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use super::error::GenerationError;
use super::model::{VideoStyle, VoiceOption};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenerateVideoRequest {
    pub script: String,
    #[serde(default)]
    pub style: Option<VideoStyle>,
    #[serde(default)]
    pub voice: Option<VoiceOption>,
    #[serde(default)]
    #[validate(range(
        min = 15,
        max = 120,
        message = "Duration must be between 15 and 120 seconds."
    ))]
    pub duration: Option<u32>,
}

impl GenerateVideoRequest {
    /// Parses a raw request body.
    ///
    /// Anything that does not carry a non-blank `script` string is rejected
    /// with [`GenerationError::MissingScript`] before the optional fields are
    /// looked at.
    pub fn from_body(body: &[u8]) -> Result<Self, GenerationError> {
        let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

        let has_script = value
            .get("script")
            .and_then(Value::as_str)
            .is_some_and(|script| !script.trim().is_empty());
        if !has_script {
            return Err(GenerationError::MissingScript);
        }

        let request: Self = serde_json::from_value(value)
            .map_err(|e| GenerationError::InvalidRequest(format!("Invalid request: {}", e)))?;

        request.validate().map_err(|errors| {
            let message = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .filter_map(|err| err.message.as_ref().map(|m| m.to_string()))
                .next()
                .unwrap_or_else(|| errors.to_string());
            GenerationError::InvalidRequest(message)
        })?;

        Ok(request)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoResponse {
    pub video_url: String,
}
