//! Environment selector to configuration

use crate::domain::{
    common_headers, Configuration, Profile, TestCredentials, DEFAULT_BASE_URL, DEFAULT_ENV,
    FALLBACK_API_TIMEOUT_MS, RETRY_COUNT, RETRY_INTERVAL_MS,
};

/// Build the configuration for `selector`.
///
/// A missing or empty selector means `dev`. Names other than `dev` and `test`
/// keep the default base URL and get no `timeout`, so `apiTimeout` falls back
/// to 10s. Never fails.
pub fn resolve(selector: Option<&str>) -> Configuration {
    tracing::debug!(selector = ?selector, "resolving environment selector");

    let env = match selector {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => DEFAULT_ENV.to_string(),
    };

    let mut base_url = DEFAULT_BASE_URL.to_string();
    let mut timeout = None;
    if let Some(profile) = Profile::from_name(&env) {
        base_url = profile.base_url().to_string();
        timeout = Some(profile.timeout_ms());
    } else {
        tracing::debug!(env = %env, "no profile for environment, using defaults");
    }

    let config = Configuration {
        env,
        base_url,
        timeout,
        api_timeout: timeout.unwrap_or(FALLBACK_API_TIMEOUT_MS),
        retry_count: RETRY_COUNT,
        retry_interval: RETRY_INTERVAL_MS,
        test_credentials: TestCredentials::default(),
        common_headers: common_headers(),
    };

    tracing::info!(config = ?config, "resolved configuration");
    config
}
