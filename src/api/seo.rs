use crate::error::AnalysisError;
use crate::models::{AppState, SeoParams, SeoReport};
use crate::services::analyze_seo;
use axum::{
    extract::{Query, State},
    Json,
};
use log::{info, warn};
use std::sync::Arc;

pub async fn run_seo_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SeoParams>,
) -> Result<Json<SeoReport>, AnalysisError> {
    let url = params.url.unwrap_or_default();
    info!("Started SEO handler for: {}", url);

    match analyze_seo(state.fetcher.as_ref(), &url).await {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            warn!("SEO analysis failed for '{}': {}", url, e);
            Err(e)
        }
    }
}
