use crate::error::AnalysisError;
use crate::models::speed::{
    BasicReport, BasicTiming, Opportunities, PageSpeedMetrics, PageSpeedReport,
};
use crate::models::{MetricName, MetricSample, SpeedReport, Strategy};
use crate::services::speed_service::classify::classify;
use crate::services::speed_service::pagespeed::PerformanceApi;
use crate::utils::{normalize_url, FetchOptions, FetchedPage, PageFetcher};
use chrono::Utc;
use log::{info, warn};
use serde_json::Value;
use std::collections::BTreeMap;

/// Resolves speed data for one URL.
///
/// With a performance API available its payload is used; any failure there
/// (transport, status, malformed body) drops to a single timed GET. Errors
/// from that fallback fetch are returned to the caller.
pub async fn resolve_speed(
    fetcher: &dyn PageFetcher,
    performance_api: Option<&dyn PerformanceApi>,
    raw_url: &str,
    strategy: Strategy,
) -> Result<SpeedReport, AnalysisError> {
    let url = normalize_url(raw_url)?;

    match performance_api {
        Some(api) => match api.run(url.as_str(), strategy).await {
            Ok(payload) => match normalize_pagespeed(url.as_str(), strategy, &payload) {
                Some(report) => {
                    info!(
                        "PageSpeed ({}) for {} scored {:?}",
                        strategy, url, report.performance_score
                    );
                    return Ok(SpeedReport::PageSpeed(report));
                }
                None => warn!(
                    "PageSpeed payload for {} had no lighthouseResult, using basic timing",
                    url
                ),
            },
            Err(e) => warn!("PageSpeed failed for {}: {}, using basic timing", url, e),
        },
        None => info!("No PageSpeed API key configured, using basic timing for {}", url),
    }

    let page = fetcher
        .fetch(url.as_str(), FetchOptions::speed_fallback())
        .await?;
    Ok(SpeedReport::Basic(basic_report(url.as_str(), strategy, &page)))
}

pub fn basic_report(url: &str, strategy: Strategy, page: &FetchedPage) -> BasicReport {
    let tiers = BTreeMap::from([(
        MetricName::ResponseTimeMs,
        classify(MetricName::ResponseTimeMs, Some(page.elapsed_ms as f64)),
    )]);

    BasicReport {
        url: url.to_string(),
        strategy,
        basic: BasicTiming {
            status: page.status,
            time_ms: page.elapsed_ms,
            bytes: page.byte_len(),
        },
        tiers,
        timestamp: Utc::now().to_rfc3339(),
    }
}

/// Maps a PageSpeed v5 payload onto the report. Returns `None` only when
/// `lighthouseResult` is missing; individual absent audits become empty samples.
pub fn normalize_pagespeed(url: &str, strategy: Strategy, payload: &Value) -> Option<PageSpeedReport> {
    let lighthouse = payload.get("lighthouseResult").filter(|v| v.is_object())?;
    let audits = lighthouse.get("audits");

    let display = |audit: &str| -> Option<String> {
        audits?
            .get(audit)?
            .get("displayValue")?
            .as_str()
            .map(str::to_string)
    };
    let sample = |audit: &str| MetricSample::from_display(display(audit));

    // DCL and load only exist as raw millisecond numbers on the `metrics` audit
    let observed = |key: &str| -> MetricSample {
        let value = audits
            .and_then(|a| a.pointer("/metrics/details/items/0"))
            .and_then(|item| item.get(key))
            .and_then(Value::as_f64);
        match value {
            Some(ms) => MetricSample {
                display_value: Some(format!("{:.0} ms", ms)),
                numeric_value: Some(ms),
            },
            None => MetricSample::missing(),
        }
    };

    let metrics = PageSpeedMetrics {
        fcp: sample("first-contentful-paint"),
        lcp: sample("largest-contentful-paint"),
        tbt: sample("total-blocking-time"),
        cls: sample("cumulative-layout-shift"),
        si: sample("speed-index"),
        tti: sample("interactive"),
        fmp: sample("first-meaningful-paint"),
        dcl: observed("observedDomContentLoaded"),
        load: observed("observedLoad"),
    };

    let performance_score = lighthouse
        .pointer("/categories/performance/score")
        .and_then(Value::as_f64)
        .map(|score| (score * 100.0).round().clamp(0.0, 100.0) as u8);

    let opportunities = Opportunities {
        unused_js: display("unused-javascript"),
        images: display("uses-optimized-images"),
        render_blocking: display("render-blocking-resources"),
    };

    let tiers = metrics
        .classifiable()
        .into_iter()
        .map(|(name, sample)| (name, classify(name, sample.numeric_value)))
        .collect();

    Some(PageSpeedReport {
        url: url.to_string(),
        strategy,
        performance_score,
        metrics,
        opportunities,
        tiers,
        timestamp: Utc::now().to_rfc3339(),
    })
}
