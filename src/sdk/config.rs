use crate::sdk::util::rate_limit::PUBLIC_OSRM_REQUESTS_PER_SECOND;
use anyhow::{Context, Result};
use std::{env, num::NonZeroU32, time::Duration};

pub const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct RouterConfig {
    /// OSRM server root, without trailing slash.
    pub base_url: String,
    pub timeout: Duration,
    pub requests_per_second: NonZeroU32,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            requests_per_second: PUBLIC_OSRM_REQUESTS_PER_SECOND,
        }
    }
}

impl RouterConfig {
    /// Reads `OSRM_BASE_URL`, `OSRM_TIMEOUT_SECS` and
    /// `OSRM_REQUESTS_PER_SECOND`, falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("OSRM_BASE_URL") {
            config = config.with_base_url(&url);
        }
        if let Some(secs) = lookup("OSRM_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("OSRM_TIMEOUT_SECS is not a number: {}", secs))?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(rate) = lookup("OSRM_REQUESTS_PER_SECOND") {
            config.requests_per_second = rate.trim().parse().with_context(|| {
                format!("OSRM_REQUESTS_PER_SECOND must be a positive integer: {}", rate)
            })?;
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim().trim_end_matches('/').to_string();
        self
    }
}
