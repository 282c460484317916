use crate::config::PAGESPEED_TIMEOUT;
use crate::error::AnalysisError;
use crate::models::Strategy;
use futures::future::BoxFuture;
use futures::FutureExt;
use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;

/// External performance measurement service.
pub trait PerformanceApi: Send + Sync {
    fn run<'a>(&'a self, url: &'a str, strategy: Strategy) -> BoxFuture<'a, Result<Value, AnalysisError>>;
}

/// PageSpeed Insights v5 `runPagespeed` client.
#[derive(Debug, Clone)]
pub struct PageSpeedClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl PageSpeedClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    async fn run_pagespeed(&self, url: &str, strategy: Strategy) -> Result<Value, AnalysisError> {
        debug!("Requesting PageSpeed ({}) for {}", strategy, url);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("url", url),
                ("strategy", strategy.as_str()),
                ("category", "performance"),
                ("key", self.api_key.as_str()),
            ])
            .timeout(PAGESPEED_TIMEOUT)
            .send()
            .await
            .map_err(|e| AnalysisError::Upstream(format!("PageSpeed request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!("PageSpeed answered {} for {}", status, url);
            return Err(AnalysisError::Upstream(format!(
                "PageSpeed responded with status {}",
                status.as_u16()
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AnalysisError::Upstream(format!("PageSpeed returned invalid JSON: {}", e)))
    }
}

impl PerformanceApi for PageSpeedClient {
    fn run<'a>(&'a self, url: &'a str, strategy: Strategy) -> BoxFuture<'a, Result<Value, AnalysisError>> {
        self.run_pagespeed(url, strategy).boxed()
    }
}
