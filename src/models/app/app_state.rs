use crate::config::AppConfig;
use crate::services::speed_service::{PageSpeedClient, PerformanceApi};
use crate::utils::{HttpFetcher, PageFetcher};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn PageFetcher>,
    /// `None` when no PageSpeed key is configured; the speed path then always
    /// uses the basic timing fallback.
    pub performance_api: Option<Arc<dyn PerformanceApi>>,
}

impl AppState {
    pub fn from_config(config: AppConfig) -> Self {
        let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpFetcher::new(config.user_agent.clone()));
        let performance_api = config.pagespeed_api_key.as_ref().map(|key| {
            Arc::new(PageSpeedClient::new(
                config.pagespeed_endpoint.clone(),
                key.clone(),
            )) as Arc<dyn PerformanceApi>
        });

        Self {
            fetcher,
            performance_api,
        }
    }
}
