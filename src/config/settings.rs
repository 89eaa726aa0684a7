use std::path::PathBuf;
use std::time::Duration;

use crate::config::env::{self, EnvKey};

pub const DEFAULT_PROVIDER_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_PROVIDER_MODEL: &str = "veo-2.0-generate-001";
pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_PROJECTS_FILE: &str = "video-projects.json";
pub const DEFAULT_THUMBNAIL_BASE_URL: &str = "https://picsum.photos";

/// Server-side settings for the generation proxy.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    pub api_key: String,
    pub provider_base_url: String,
    pub provider_model: String,
    pub poll_interval_secs: u64,
    pub provider_max_polls: Option<u32>,
    pub provider_timeout_secs: u64,
}

impl AppConfig {
    pub fn new() -> Result<Self, std::env::VarError> {
        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            api_key: env::get(EnvKey::ApiKey)?,
            provider_base_url: env::get_or(EnvKey::ProviderBaseUrl, DEFAULT_PROVIDER_BASE_URL),
            provider_model: env::get_or(EnvKey::ProviderModel, DEFAULT_PROVIDER_MODEL),
            poll_interval_secs: at_least_one_sec(env::get_parsed(EnvKey::PollIntervalSecs, 10)),
            provider_max_polls: at_least_one_poll(env::get_optional(EnvKey::ProviderMaxPolls)),
            provider_timeout_secs: env::get_parsed(EnvKey::ProviderTimeoutSecs, 60),
        })
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }
}

// Zero would turn the poll loop into a busy loop or a bound that never checks.
fn at_least_one_sec(secs: u64) -> u64 {
    secs.max(1)
}

fn at_least_one_poll(max_polls: Option<u32>) -> Option<u32> {
    max_polls.map(|max| max.max(1))
}

/// Client-side settings used by the CLI front-end.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_url: String,
    pub projects_file: PathBuf,
    pub thumbnail_base_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: env::get_or(EnvKey::ClientApiUrl, DEFAULT_API_URL),
            projects_file: PathBuf::from(env::get_or(
                EnvKey::ClientProjectsFile,
                DEFAULT_PROJECTS_FILE,
            )),
            thumbnail_base_url: env::get_or(EnvKey::ThumbnailBaseUrl, DEFAULT_THUMBNAIL_BASE_URL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_poll_interval_is_raised_to_one_second() {
        assert_eq!(at_least_one_sec(0), 1);
        assert_eq!(at_least_one_sec(10), 10);
    }

    #[test]
    fn zero_poll_bound_still_allows_one_check() {
        assert_eq!(at_least_one_poll(Some(0)), Some(1));
        assert_eq!(at_least_one_poll(Some(4)), Some(4));
        assert_eq!(at_least_one_poll(None), None);
    }
}
