use crate::models::seo::CategoryScore;
use crate::models::{PageFacts, Priority, Recommendation, RecommendationType, ScoreBreakdown};
use std::ops::RangeInclusive;

pub const TITLE_LENGTH: RangeInclusive<usize> = 30..=60;
pub const META_DESCRIPTION_LENGTH: RangeInclusive<usize> = 120..=160;

/// One row of the scoring rubric.
///
/// `award` returns the points earned (never above `max_points`); `advise`
/// returns a fix exactly when the full-credit condition is not met.
pub struct RubricItem {
    pub category: RecommendationType,
    pub max_points: u32,
    pub award: fn(&PageFacts) -> u32,
    pub advise: fn(&PageFacts) -> Option<(Priority, String)>,
}

/// Evaluated top to bottom; recommendation order follows this order.
pub static RUBRIC: [RubricItem; 8] = [
    RubricItem {
        category: RecommendationType::Title,
        max_points: 20,
        award: award_title,
        advise: advise_title,
    },
    RubricItem {
        category: RecommendationType::MetaDescription,
        max_points: 15,
        award: award_meta_description,
        advise: advise_meta_description,
    },
    RubricItem {
        category: RecommendationType::Headings,
        max_points: 15,
        award: award_headings,
        advise: advise_headings,
    },
    RubricItem {
        category: RecommendationType::Images,
        max_points: 10,
        award: award_images,
        advise: advise_images,
    },
    RubricItem {
        category: RecommendationType::Security,
        max_points: 10,
        award: award_https,
        advise: advise_https,
    },
    RubricItem {
        category: RecommendationType::Technical,
        max_points: 10,
        award: award_canonical,
        advise: advise_canonical,
    },
    RubricItem {
        category: RecommendationType::Mobile,
        max_points: 10,
        award: award_viewport,
        advise: advise_viewport,
    },
    RubricItem {
        category: RecommendationType::StructuredData,
        max_points: 10,
        award: award_structured_data,
        advise: advise_structured_data,
    },
];

pub fn max_score() -> u32 {
    RUBRIC.iter().map(|item| item.max_points).sum()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub breakdown: ScoreBreakdown,
    pub recommendations: Vec<Recommendation>,
}

/// Scores facts against the whole rubric. The denominator is always the sum
/// of every category maximum, whichever branches fired.
pub fn assess(facts: &PageFacts) -> Assessment {
    let mut categories = Vec::with_capacity(RUBRIC.len());
    let mut recommendations = Vec::new();

    for item in RUBRIC.iter() {
        let awarded = (item.award)(facts).min(item.max_points);
        categories.push(CategoryScore {
            category: item.category,
            awarded,
            max: item.max_points,
        });

        if let Some((priority, message)) = (item.advise)(facts) {
            recommendations.push(Recommendation {
                kind: item.category,
                priority,
                message,
            });
        }
    }

    Assessment {
        breakdown: ScoreBreakdown::new(categories),
        recommendations,
    }
}

fn flag(present: bool) -> u32 {
    if present {
        10
    } else {
        0
    }
}

fn award_title(facts: &PageFacts) -> u32 {
    match facts.title_length {
        0 => 0,
        len if TITLE_LENGTH.contains(&len) => 20,
        _ => 10,
    }
}

fn advise_title(facts: &PageFacts) -> Option<(Priority, String)> {
    match facts.title_length {
        0 => Some((
            Priority::High,
            "Add a title tag to your page".to_string(),
        )),
        len if TITLE_LENGTH.contains(&len) => None,
        len => Some((
            Priority::High,
            format!(
                "Title is {} characters. Aim for {}-{} characters.",
                len,
                TITLE_LENGTH.start(),
                TITLE_LENGTH.end()
            ),
        )),
    }
}

fn award_meta_description(facts: &PageFacts) -> u32 {
    match facts.meta_description_length {
        0 => 0,
        len if META_DESCRIPTION_LENGTH.contains(&len) => 15,
        _ => 7,
    }
}

fn advise_meta_description(facts: &PageFacts) -> Option<(Priority, String)> {
    match facts.meta_description_length {
        0 => Some((
            Priority::High,
            "Add a meta description to summarize the page in search results".to_string(),
        )),
        len if META_DESCRIPTION_LENGTH.contains(&len) => None,
        len => Some((
            Priority::High,
            format!(
                "Meta description is {} characters. Aim for {}-{} characters.",
                len,
                META_DESCRIPTION_LENGTH.start(),
                META_DESCRIPTION_LENGTH.end()
            ),
        )),
    }
}

fn award_headings(facts: &PageFacts) -> u32 {
    match facts.h1_count {
        0 => 0,
        1 => 15,
        _ => 5,
    }
}

fn advise_headings(facts: &PageFacts) -> Option<(Priority, String)> {
    match facts.h1_count {
        0 => Some((
            Priority::High,
            "Add an H1 heading that describes the page".to_string(),
        )),
        1 => None,
        count => Some((
            Priority::Medium,
            format!("Found {} H1 tags. Use only one H1 per page.", count),
        )),
    }
}

fn award_images(facts: &PageFacts) -> u32 {
    if facts.image_count == 0 || facts.images_with_alt >= facts.image_count {
        10
    } else if facts.images_with_alt > 0 {
        5
    } else {
        0
    }
}

fn advise_images(facts: &PageFacts) -> Option<(Priority, String)> {
    match facts.images_missing_alt() {
        0 => None,
        1 => Some((
            Priority::Medium,
            "1 image is missing alt text".to_string(),
        )),
        missing => Some((
            Priority::Medium,
            format!("{} images are missing alt text", missing),
        )),
    }
}

fn award_https(facts: &PageFacts) -> u32 {
    flag(facts.is_https)
}

fn advise_https(facts: &PageFacts) -> Option<(Priority, String)> {
    (!facts.is_https).then(|| {
        (
            Priority::High,
            "Serve the page over HTTPS to protect visitors and rankings".to_string(),
        )
    })
}

fn award_canonical(facts: &PageFacts) -> u32 {
    flag(facts.has_canonical)
}

fn advise_canonical(facts: &PageFacts) -> Option<(Priority, String)> {
    (!facts.has_canonical).then(|| {
        (
            Priority::Medium,
            "Add a canonical link tag to avoid duplicate content issues".to_string(),
        )
    })
}

fn award_viewport(facts: &PageFacts) -> u32 {
    flag(facts.has_viewport)
}

fn advise_viewport(facts: &PageFacts) -> Option<(Priority, String)> {
    (!facts.has_viewport).then(|| {
        (
            Priority::High,
            "Add a viewport meta tag so the page renders well on mobile".to_string(),
        )
    })
}

fn award_structured_data(facts: &PageFacts) -> u32 {
    flag(facts.has_structured_data)
}

fn advise_structured_data(facts: &PageFacts) -> Option<(Priority, String)> {
    (!facts.has_structured_data).then(|| {
        (
            Priority::Low,
            "Add JSON-LD structured data to describe the page to search engines".to_string(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perfect() -> PageFacts {
        let title = "x".repeat(45);
        let description = "d".repeat(140);
        PageFacts {
            title_length: title.chars().count(),
            title,
            meta_description_length: description.chars().count(),
            meta_description: description,
            h1_texts: vec!["Heading".to_string()],
            h1_count: 1,
            h2_count: 2,
            image_count: 3,
            images_with_alt: 3,
            has_canonical: true,
            has_robots_meta: true,
            has_viewport: true,
            has_structured_data: true,
            is_https: true,
        }
    }

    fn with_title_len(len: usize) -> PageFacts {
        let title = "t".repeat(len);
        PageFacts {
            title_length: len,
            title,
            ..perfect()
        }
    }

    fn with_h1s(count: usize) -> PageFacts {
        let h1_texts: Vec<String> = (0..count).map(|i| format!("Heading {}", i)).collect();
        PageFacts {
            h1_count: h1_texts.len(),
            h1_texts,
            ..perfect()
        }
    }

    fn recommendation_for(
        assessment: &Assessment,
        kind: RecommendationType,
    ) -> Option<&Recommendation> {
        assessment.recommendations.iter().find(|r| r.kind == kind)
    }

    #[test]
    fn rubric_totals_110() {
        assert_eq!(max_score(), 110);
    }

    #[test]
    fn perfect_page_scores_100_with_no_recommendations() {
        let assessment = assess(&perfect());
        assert_eq!(assessment.breakdown.raw_score, 110);
        assert_eq!(assessment.breakdown.final_score, 100);
        assert!(assessment.recommendations.is_empty());
    }

    #[test]
    fn empty_page_scores_zero_after_image_vacuity() {
        let facts = PageFacts::default();
        let assessment = assess(&facts);
        // only the image category is vacuously satisfied
        assert_eq!(assessment.breakdown.raw_score, 10);
        assert_eq!(assessment.breakdown.max_score, 110);
        assert_eq!(assessment.breakdown.final_score, 9);
        assert!(recommendation_for(&assessment, RecommendationType::Images).is_none());
    }

    #[test]
    fn title_boundaries() {
        for len in [30, 60] {
            assert_eq!(award_title(&with_title_len(len)), 20, "len {}", len);
            assert!(advise_title(&with_title_len(len)).is_none());
        }
        for len in [29, 61] {
            assert_eq!(award_title(&with_title_len(len)), 10, "len {}", len);
            assert_eq!(advise_title(&with_title_len(len)).unwrap().0, Priority::High);
        }
        assert_eq!(award_title(&with_title_len(0)), 0);
        let (priority, _) = advise_title(&with_title_len(0)).unwrap();
        assert_eq!(priority, Priority::High);
    }

    #[test]
    fn meta_description_boundaries() {
        let with_len = |len: usize| PageFacts {
            meta_description: "m".repeat(len),
            meta_description_length: len,
            ..perfect()
        };
        assert_eq!(award_meta_description(&with_len(120)), 15);
        assert_eq!(award_meta_description(&with_len(160)), 15);
        assert_eq!(award_meta_description(&with_len(119)), 7);
        assert_eq!(award_meta_description(&with_len(161)), 7);
        assert_eq!(award_meta_description(&with_len(0)), 0);
        assert!(advise_meta_description(&with_len(161)).is_some());
        assert!(advise_meta_description(&with_len(140)).is_none());
    }

    #[test]
    fn heading_rules() {
        assert_eq!(award_headings(&with_h1s(1)), 15);
        assert!(advise_headings(&with_h1s(1)).is_none());

        assert_eq!(award_headings(&with_h1s(0)), 0);
        let (priority, message) = advise_headings(&with_h1s(0)).unwrap();
        assert_eq!(priority, Priority::High);
        assert!(message.contains("Add an H1"));

        assert_eq!(award_headings(&with_h1s(2)), 5);
        let (priority, message) = advise_headings(&with_h1s(2)).unwrap();
        assert_eq!(priority, Priority::Medium);
        assert!(message.contains("Found 2"));
        assert!(message.contains("only one H1"));
    }

    #[test]
    fn image_rules() {
        let with_images = |total: usize, alt: usize| PageFacts {
            image_count: total,
            images_with_alt: alt,
            ..perfect()
        };
        assert_eq!(award_images(&with_images(0, 0)), 10);
        assert_eq!(award_images(&with_images(4, 4)), 10);
        assert_eq!(award_images(&with_images(4, 1)), 5);
        assert_eq!(award_images(&with_images(4, 0)), 0);

        let (priority, message) = advise_images(&with_images(4, 1)).unwrap();
        assert_eq!(priority, Priority::Medium);
        assert!(message.starts_with("3 images"));
        assert!(advise_images(&with_images(0, 0)).is_none());
    }

    #[test]
    fn technical_flags() {
        let facts = PageFacts {
            is_https: false,
            has_canonical: false,
            has_viewport: false,
            has_structured_data: false,
            ..perfect()
        };
        let assessment = assess(&facts);
        assert_eq!(assessment.breakdown.raw_score, 70);
        assert_eq!(assessment.breakdown.final_score, 64);

        let kinds: Vec<(RecommendationType, Priority)> = assessment
            .recommendations
            .iter()
            .map(|r| (r.kind, r.priority))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (RecommendationType::Security, Priority::High),
                (RecommendationType::Technical, Priority::Medium),
                (RecommendationType::Mobile, Priority::High),
                (RecommendationType::StructuredData, Priority::Low),
            ]
        );
    }

    #[test]
    fn recommendation_fires_exactly_when_credit_is_partial() {
        let samples = [
            PageFacts::default(),
            perfect(),
            with_title_len(10),
            with_h1s(3),
            PageFacts {
                image_count: 2,
                images_with_alt: 1,
                is_https: false,
                ..perfect()
            },
        ];
        for facts in samples.iter() {
            for item in RUBRIC.iter() {
                let full = (item.award)(facts) == item.max_points;
                assert_eq!(
                    (item.advise)(facts).is_none(),
                    full,
                    "{} on {:?}",
                    item.category,
                    facts
                );
            }
        }
    }

    #[test]
    fn documented_page_scores_50() {
        // 45 char title, no description, two H1s, all images with alt,
        // https, no canonical, viewport, no structured data
        let facts = PageFacts {
            meta_description: String::new(),
            meta_description_length: 0,
            has_canonical: false,
            has_structured_data: false,
            ..with_h1s(2)
        };
        let assessment = assess(&facts);

        let awarded: Vec<u32> = assessment
            .breakdown
            .categories
            .iter()
            .map(|c| c.awarded)
            .collect();
        assert_eq!(awarded, vec![20, 0, 5, 10, 10, 0, 10, 0]);
        assert_eq!(assessment.breakdown.raw_score, 55);
        assert_eq!(assessment.breakdown.final_score, 50);

        let kinds: Vec<(RecommendationType, Priority)> = assessment
            .recommendations
            .iter()
            .map(|r| (r.kind, r.priority))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (RecommendationType::MetaDescription, Priority::High),
                (RecommendationType::Headings, Priority::Medium),
                (RecommendationType::Technical, Priority::Medium),
                (RecommendationType::StructuredData, Priority::Low),
            ]
        );
    }
}
