use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::error::LifecycleError;
use crate::modules::generation::model::GenerationRequest;

const GENERATE_PATH: &str = "/api/generate-video";
const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// Talks to the generation proxy on behalf of the lifecycle.
#[derive(Clone)]
pub struct ProxyClient {
    http_client: Client,
    base_url: String,
}

impl ProxyClient {
    /// No overall timeout is set: generation legitimately takes minutes.
    pub fn new(base_url: &str) -> Result<Self, LifecycleError> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Sends one generation request and returns the finished video URL.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<String, LifecycleError> {
        let url = format!("{}{}", self.base_url, GENERATE_PATH);
        debug!("POST {}", url);

        let response = self.http_client.post(&url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = match response.json::<Value>().await {
                Ok(body) => body
                    .get("message")
                    .and_then(Value::as_str)
                    .filter(|message| !message.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| {
                        format!("Server responded with status: {}", status.as_u16())
                    }),
                Err(_) => UNKNOWN_ERROR.to_string(),
            };
            return Err(LifecycleError::Server(message));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| LifecycleError::InvalidResponse(e.to_string()))?;

        body.get("videoUrl")
            .and_then(Value::as_str)
            .filter(|video_url| !video_url.is_empty())
            .map(str::to_string)
            .ok_or(LifecycleError::MissingVideoUrl)
    }
}
