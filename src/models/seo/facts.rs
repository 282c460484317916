use serde::Serialize;

/// On-page signals pulled from one HTML document.
///
/// Built once per request by the extractor and only read afterwards.
/// `images_with_alt <= image_count` and `h1_count == h1_texts.len()` hold for
/// every value the extractor produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFacts {
    pub title: String,
    pub title_length: usize,
    pub meta_description: String,
    pub meta_description_length: usize,
    pub h1_texts: Vec<String>,
    pub h1_count: usize,
    pub h2_count: usize,
    pub image_count: usize,
    pub images_with_alt: usize,
    pub has_canonical: bool,
    pub has_robots_meta: bool,
    pub has_viewport: bool,
    pub has_structured_data: bool,
    pub is_https: bool,
}

impl PageFacts {
    pub fn images_missing_alt(&self) -> usize {
        self.image_count.saturating_sub(self.images_with_alt)
    }
}
