use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerPort,
    ApiKey,
    ProviderBaseUrl,
    ProviderModel,
    PollIntervalSecs,
    ProviderMaxPolls,
    ProviderTimeoutSecs,
    ClientApiUrl,
    ClientProjectsFile,
    ThumbnailBaseUrl,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::ApiKey => "API_KEY",
            EnvKey::ProviderBaseUrl => "PROVIDER_BASE_URL",
            EnvKey::ProviderModel => "PROVIDER_MODEL",
            EnvKey::PollIntervalSecs => "POLL_INTERVAL_SECS",
            EnvKey::ProviderMaxPolls => "PROVIDER_MAX_POLLS",
            EnvKey::ProviderTimeoutSecs => "PROVIDER_TIMEOUT_SECS",
            EnvKey::ClientApiUrl => "VIDEOGEN_API_URL",
            EnvKey::ClientProjectsFile => "VIDEOGEN_PROJECTS_FILE",
            EnvKey::ThumbnailBaseUrl => "THUMBNAIL_BASE_URL",
        }
    }
}

/// Reads a variable, treating an empty value as unset.
pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    match env::var(key.as_str()) {
        Ok(val) if val.trim().is_empty() => Err(env::VarError::NotPresent),
        other => other,
    }
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    get(key).unwrap_or_else(|_| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}

pub fn get_optional<T: FromStr>(key: EnvKey) -> Option<T> {
    get(key).ok().and_then(|val| val.parse::<T>().ok())
}
