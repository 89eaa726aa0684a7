use tracing::info;
use url::Url;

use super::dto::{GenerateVideoRequest, GenerateVideoResponse};
use super::error::GenerationError;
use super::poller::OperationPoller;
use crate::state::AppState;

pub struct GenerationService;

impl GenerationService {
    pub async fn generate(
        state: AppState,
        req: GenerateVideoRequest,
    ) -> Result<GenerateVideoResponse, GenerationError> {
        info!(
            "Generating video: {} chars, style {:?}, voice {:?}, duration {:?}",
            req.script.chars().count(),
            req.style,
            req.voice,
            req.duration
        );

        let poller = OperationPoller::new(
            state.provider.as_ref(),
            state.sleeper.as_ref(),
            state.config.poll_interval(),
            state.config.provider_max_polls,
        );
        let download_link = poller.run(&req.script).await?;

        let video_url = sign_download_link(&download_link, &state.config.api_key)?;
        info!("Video ready");

        Ok(GenerateVideoResponse { video_url })
    }
}

/// Appends the provider credential so the link can be fetched without it.
pub fn sign_download_link(link: &str, api_key: &str) -> Result<String, GenerationError> {
    let mut url =
        Url::parse(link).map_err(|e| GenerationError::MalformedDownloadLink(e.to_string()))?;
    url.query_pairs_mut().append_pair("key", api_key);
    Ok(url.into())
}
