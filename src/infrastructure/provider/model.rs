use serde::{Deserialize, Serialize};

/// Long-running operation as reported by the provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub name: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<OperationError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<OperationResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationError {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResponse {
    #[serde(default)]
    pub generate_video_response: Option<GenerateVideoResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoResponse {
    #[serde(default)]
    pub generated_samples: Vec<GeneratedSample>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSample {
    #[serde(default)]
    pub video: Option<GeneratedVideo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedVideo {
    #[serde(default)]
    pub uri: Option<String>,
}

impl Operation {
    pub fn pending(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn completed(name: &str, uri: &str) -> Self {
        Self {
            name: name.to_string(),
            done: true,
            error: None,
            response: Some(OperationResponse {
                generate_video_response: Some(GenerateVideoResponse {
                    generated_samples: vec![GeneratedSample {
                        video: Some(GeneratedVideo {
                            uri: Some(uri.to_string()),
                        }),
                    }],
                }),
            }),
        }
    }

    pub fn failed(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            done: true,
            error: Some(OperationError {
                code: 500,
                message: message.to_string(),
            }),
            response: None,
        }
    }

    /// URI of the first generated video, if the provider returned one.
    pub fn download_link(&self) -> Option<&str> {
        self.response
            .as_ref()?
            .generate_video_response
            .as_ref()?
            .generated_samples
            .first()?
            .video
            .as_ref()?
            .uri
            .as_deref()
            .filter(|uri| !uri.is_empty())
    }
}

/// Request body for `models/{model}:predictLongRunning`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PredictRequest<'a> {
    pub instances: Vec<PredictInstance<'a>>,
    pub parameters: PredictParameters,
}

#[derive(Debug, Serialize)]
pub(crate) struct PredictInstance<'a> {
    pub prompt: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PredictParameters {
    pub sample_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_sample_uri() {
        let json = r#"{
            "name": "models/veo/operations/abc",
            "done": true,
            "response": {
                "generateVideoResponse": {
                    "generatedSamples": [
                        { "video": { "uri": "https://files.example/v1:download?alt=media" } }
                    ]
                }
            }
        }"#;
        let operation: Operation = serde_json::from_str(json).unwrap();
        assert!(operation.done);
        assert_eq!(
            operation.download_link(),
            Some("https://files.example/v1:download?alt=media")
        );
    }

    #[test]
    fn missing_pieces_yield_no_link() {
        let operation: Operation = serde_json::from_str(r#"{"name": "op", "done": true}"#).unwrap();
        assert_eq!(operation.download_link(), None);

        let empty: Operation = serde_json::from_str(
            r#"{"name": "op", "done": true, "response": {"generateVideoResponse": {"generatedSamples": []}}}"#,
        )
        .unwrap();
        assert_eq!(empty.download_link(), None);
    }

    #[test]
    fn done_defaults_to_false() {
        let operation: Operation = serde_json::from_str(r#"{"name": "op"}"#).unwrap();
        assert!(!operation.done);
    }
}
