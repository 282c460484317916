// src/config.rs

use std::env;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3043";
pub const DEFAULT_PAGESPEED_ENDPOINT: &str =
    "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; PagegradeBot/0.1; +https://github.com/pagegrade/pagegrade)";

pub const SEO_FETCH_TIMEOUT: Duration = Duration::from_secs(10);
pub const SPEED_FETCH_TIMEOUT: Duration = Duration::from_secs(20);
pub const PAGESPEED_TIMEOUT: Duration = Duration::from_secs(30);
pub const MAX_REDIRECTS: usize = 5;
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub pagespeed_api_key: Option<String>,
    pub pagespeed_endpoint: String,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            pagespeed_api_key: None,
            pagespeed_endpoint: DEFAULT_PAGESPEED_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Self {
        // Runs before logging is installed so RUST_LOG can come from .env.
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            bind_addr: non_blank("BIND_ADDR").unwrap_or(defaults.bind_addr),
            pagespeed_api_key: non_blank("PAGESPEED_API_KEY"),
            pagespeed_endpoint: non_blank("PAGESPEED_ENDPOINT")
                .unwrap_or(defaults.pagespeed_endpoint),
            user_agent: non_blank("SEO_USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }
}
