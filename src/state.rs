use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::infrastructure::provider::VideoProvider;
use crate::modules::generation::poller::Sleeper;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub provider: Arc<dyn VideoProvider>,
    pub sleeper: Arc<dyn Sleeper>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        provider: Arc<dyn VideoProvider>,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        Self {
            config,
            provider,
            sleeper,
        }
    }
}
