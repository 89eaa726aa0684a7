use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use super::model::{Operation, PredictInstance, PredictParameters, PredictRequest};
use super::VideoProvider;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Provider request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Provider responded with status {status}: {text}")]
    UnexpectedStatus { status: StatusCode, text: String },
}

/// Veo models served through the Generative Language REST API.
#[derive(Clone)]
pub struct GeminiVideoProvider {
    http_client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiVideoProvider {
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .build()?;

        info!("✅ Video provider configured: {} ({})", base_url, model);

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        })
    }

    async fn read_operation(response: reqwest::Response) -> Result<Operation, ProviderError> {
        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            status => {
                let text = response.text().await?;
                Err(ProviderError::UnexpectedStatus { status, text })
            }
        }
    }
}

#[async_trait]
impl VideoProvider for GeminiVideoProvider {
    async fn submit(&self, prompt: &str) -> Result<Operation, ProviderError> {
        let url = format!("{}/models/{}:predictLongRunning", self.base_url, self.model);
        let body = PredictRequest {
            instances: vec![PredictInstance { prompt }],
            parameters: PredictParameters { sample_count: 1 },
        };

        let response = self
            .http_client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let operation = Self::read_operation(response).await?;
        debug!("Submitted generation, operation {}", operation.name);
        Ok(operation)
    }

    async fn refresh(&self, operation: &Operation) -> Result<Operation, ProviderError> {
        let url = format!("{}/{}", self.base_url, operation.name);

        let response = self
            .http_client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        Self::read_operation(response).await
    }
}
