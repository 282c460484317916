pub mod facts;
pub mod report;

pub use facts::PageFacts;
pub use report::{
    CategoryScore, ContentMetrics, HeadingMetrics, ImageMetrics, Priority, Recommendation,
    RecommendationType, ScoreBreakdown, SeoMetrics, SeoReport, TechnicalMetrics, TextMetric,
};
