use crate::error::AnalysisError;
use crate::models::{AppState, MetricTier, SpeedParams, SpeedReport, Strategy};
use crate::services::resolve_speed;
use axum::{
    extract::{Query, State},
    Json,
};
use log::{info, warn};
use std::sync::Arc;

pub async fn run_speed_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SpeedParams>,
) -> Result<Json<SpeedReport>, AnalysisError> {
    let url = params.url.unwrap_or_default();
    let strategy = match params.strategy.as_deref() {
        Some(raw) if !raw.trim().is_empty() => raw.parse::<Strategy>()?,
        _ => Strategy::default(),
    };
    info!("Started speed handler for: {} ({})", url, strategy);

    match resolve_speed(
        state.fetcher.as_ref(),
        state.performance_api.as_deref(),
        &url,
        strategy,
    )
    .await
    {
        Ok(report) => {
            let good = report
                .tiers()
                .values()
                .filter(|tier| **tier == MetricTier::Good)
                .count();
            info!(
                "Speed report for {} ready (PageSpeed: {}, {}/{} metrics good)",
                url,
                report.using_pagespeed_api(),
                good,
                report.tiers().len()
            );
            Ok(Json(report))
        }
        Err(e) => {
            warn!("Speed analysis failed for '{}': {}", url, e);
            Err(e)
        }
    }
}
