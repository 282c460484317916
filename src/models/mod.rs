// src/models/mod.rs

pub mod api;
pub mod app;
pub mod seo;
pub mod speed;

pub use api::{SeoParams, SpeedParams};
pub use app::AppState;
pub use seo::{PageFacts, Priority, Recommendation, RecommendationType, ScoreBreakdown, SeoReport};
pub use speed::{MetricName, MetricSample, MetricTier, SpeedReport, Strategy};
