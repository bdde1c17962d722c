use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;
use url::Url;

use crate::scrape::error::ScrapeError;

const DEFAULT_BASE_URL: &str = "https://smite.fandom.com";
const DEFAULT_LISTING_PATH: &str = "/wiki/List_of_gods";
const DEFAULT_OUTPUT: &str = "./gods.json";
const DEFAULT_TIMEOUT_SECS: u64 = 20;
const DEFAULT_USER_AGENT: &str = concat!("smite-gods/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub listing_path: String,
    pub output: PathBuf,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            listing_path: DEFAULT_LISTING_PATH.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ScrapeConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(base) = std::env::var("GODS_BASE_URL") {
            cfg.base_url = base;
        }
        if let Ok(out) = std::env::var("GODS_OUTPUT") {
            cfg.output = PathBuf::from(out);
        }
        if let Ok(timeout) = std::env::var("GODS_TIMEOUT_SECS") {
            match parse_timeout(&timeout) {
                Some(parsed) => cfg.timeout = parsed,
                None => warn!(
                    value = %timeout,
                    default_secs = DEFAULT_TIMEOUT_SECS,
                    "GODS_TIMEOUT_SECS must be a whole number of seconds above zero; using the default"
                ),
            }
        }
        if let Ok(ua) = std::env::var("GODS_USER_AGENT") {
            cfg.user_agent = ua;
        }
        cfg
    }

    /// CLI flags win over the environment.
    pub fn with_overrides(mut self, base_url: Option<String>, output: Option<PathBuf>, timeout_secs: Option<u64>) -> Self {
        if let Some(base) = base_url { self.base_url = base; }
        if let Some(out) = output { self.output = out; }
        if let Some(secs) = timeout_secs { self.timeout = Duration::from_secs(secs); }
        self
    }

    pub fn site(&self) -> Result<Site, ScrapeError> {
        let base = Url::parse(&self.base_url)
            .map_err(|source| ScrapeError::InvalidUrl { url: self.base_url.clone(), source })?;
        let listing = base
            .join(&self.listing_path)
            .map_err(|source| ScrapeError::InvalidUrl { url: self.listing_path.clone(), source })?;
        Ok(Site { base, listing })
    }
}

/// Whole seconds, at least one. A zero timeout would fail every request.
fn parse_timeout(raw: &str) -> Option<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(secs) => Some(Duration::from_secs(secs)),
    }
}

/// Resolved origin handed to the extractors and the assembler.
#[derive(Clone, Debug)]
pub struct Site {
    pub base: Url,
    pub listing: Url,
}
