// src/services/seo_audit_service/mod.rs

pub mod extract;
pub mod score;

pub use extract::extract_facts;
pub use score::{assess, max_score, Assessment, RubricItem, RUBRIC};

use crate::error::AnalysisError;
use crate::models::seo::SeoMetrics;
use crate::models::SeoReport;
use crate::utils::{normalize_url, FetchOptions, PageFetcher};
use chrono::Utc;
use log::info;

/// URL -> fetch -> extract -> score. Fetch failures are terminal here; there
/// is no retry and no fallback on the SEO path.
pub async fn analyze_seo(fetcher: &dyn PageFetcher, raw_url: &str) -> Result<SeoReport, AnalysisError> {
    let url = normalize_url(raw_url)?;
    info!("Running SEO analysis for {}", url);

    let page = fetcher.fetch(url.as_str(), FetchOptions::seo()).await?;
    let facts = extract_facts(&page.text(), &url);
    let Assessment {
        breakdown,
        recommendations,
    } = assess(&facts);

    info!(
        "SEO analysis for {} scored {} ({}/{}) with {} recommendations",
        url,
        breakdown.final_score,
        breakdown.raw_score,
        breakdown.max_score,
        recommendations.len()
    );

    Ok(SeoReport {
        url: url.to_string(),
        status: page.status,
        ttfb_ms: page.ttfb_ms,
        score: breakdown.final_score,
        metrics: SeoMetrics::from(&facts),
        score_breakdown: breakdown,
        recommendations,
        timestamp: Utc::now().to_rfc3339(),
    })
}
