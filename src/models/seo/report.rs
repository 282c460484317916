use crate::models::seo::facts::PageFacts;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationType {
    Title,
    MetaDescription,
    Headings,
    Images,
    Security,
    Technical,
    Mobile,
    StructuredData,
}

impl fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecommendationType::Title => "title",
            RecommendationType::MetaDescription => "meta-description",
            RecommendationType::Headings => "headings",
            RecommendationType::Images => "images",
            RecommendationType::Security => "security",
            RecommendationType::Technical => "technical",
            RecommendationType::Mobile => "mobile",
            RecommendationType::StructuredData => "structured-data",
        };
        write!(f, "{}", name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub priority: Priority,
    pub message: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: RecommendationType,
    pub awarded: u32,
    pub max: u32,
}

// Score with the points it came from
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub raw_score: u32,
    pub max_score: u32,
    pub final_score: u8,
    pub categories: Vec<CategoryScore>,
}

impl ScoreBreakdown {
    pub fn new(categories: Vec<CategoryScore>) -> Self {
        let raw_score: u32 = categories.iter().map(|c| c.awarded).sum();
        let max_score: u32 = categories.iter().map(|c| c.max).sum();
        let final_score = if max_score == 0 {
            0
        } else {
            let pct = (f64::from(raw_score) / f64::from(max_score) * 100.0).round();
            pct.clamp(0.0, 100.0) as u8
        };

        Self {
            raw_score,
            max_score,
            final_score,
            categories,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct TextMetric {
    pub text: String,
    pub length: usize,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HeadingMetrics {
    pub h1: usize,
    pub h2: usize,
    pub h1_texts: Vec<String>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetrics {
    pub title: TextMetric,
    pub meta_description: TextMetric,
    pub headings: HeadingMetrics,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalMetrics {
    pub https: bool,
    pub canonical: bool,
    pub viewport: bool,
    pub robots_meta: bool,
    pub structured_data: bool,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ImageMetrics {
    pub total: usize,
    pub with_alt: usize,
    pub alt_optimized: bool,
}

#[derive(Serialize, Debug, Clone)]
pub struct SeoMetrics {
    pub content: ContentMetrics,
    pub technical: TechnicalMetrics,
    pub images: ImageMetrics,
}

impl From<&PageFacts> for SeoMetrics {
    fn from(facts: &PageFacts) -> Self {
        Self {
            content: ContentMetrics {
                title: TextMetric {
                    text: facts.title.clone(),
                    length: facts.title_length,
                },
                meta_description: TextMetric {
                    text: facts.meta_description.clone(),
                    length: facts.meta_description_length,
                },
                headings: HeadingMetrics {
                    h1: facts.h1_count,
                    h2: facts.h2_count,
                    h1_texts: facts.h1_texts.clone(),
                },
            },
            technical: TechnicalMetrics {
                https: facts.is_https,
                canonical: facts.has_canonical,
                viewport: facts.has_viewport,
                robots_meta: facts.has_robots_meta,
                structured_data: facts.has_structured_data,
            },
            images: ImageMetrics {
                total: facts.image_count,
                with_alt: facts.images_with_alt,
                alt_optimized: facts.images_missing_alt() == 0,
            },
        }
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    pub url: String,
    pub status: u16,
    pub ttfb_ms: u64,
    pub score: u8,
    pub score_breakdown: ScoreBreakdown,
    pub metrics: SeoMetrics,
    pub recommendations: Vec<Recommendation>,
    pub timestamp: String,
}
