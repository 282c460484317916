use crate::models::PageFacts;
use crate::utils::is_https;
use log::{debug, error};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

static HEAD_TITLE: LazyLock<Option<Selector>> = LazyLock::new(|| compile("head title"));
static TITLE: LazyLock<Option<Selector>> = LazyLock::new(|| compile("title"));
static META: LazyLock<Option<Selector>> = LazyLock::new(|| compile("meta[name]"));
static LINK: LazyLock<Option<Selector>> = LazyLock::new(|| compile("link[rel]"));
static SCRIPT: LazyLock<Option<Selector>> = LazyLock::new(|| compile("script[type]"));
static H1: LazyLock<Option<Selector>> = LazyLock::new(|| compile("h1"));
static H2: LazyLock<Option<Selector>> = LazyLock::new(|| compile("h2"));
static IMG: LazyLock<Option<Selector>> = LazyLock::new(|| compile("img"));

fn compile(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            error!("Failed to parse selector '{}': {:?}", css, e);
            None
        }
    }
}

fn select<'a>(
    document: &'a Html,
    selector: &'a Option<Selector>,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    selector.iter().flat_map(move |s| document.select(s))
}

fn attr_eq(element: &ElementRef<'_>, name: &str, expected: &str) -> bool {
    element
        .value()
        .attr(name)
        .is_some_and(|v| v.trim().eq_ignore_ascii_case(expected))
}

fn first_meta<'a>(document: &'a Html, name: &str) -> Option<ElementRef<'a>> {
    select(document, &META).find(|m| attr_eq(m, "name", name))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The document title: the first `<title>` in `<head>`, else the first one
/// outside inline SVG (an `<svg><title>` is an image tooltip).
fn page_title(document: &Html) -> Option<ElementRef<'_>> {
    select(document, &HEAD_TITLE).next().or_else(|| {
        select(document, &TITLE).find(|t| {
            !t.ancestors()
                .filter_map(ElementRef::wrap)
                .any(|a| a.value().name() == "svg")
        })
    })
}

/// Pulls SEO facts out of raw HTML.
///
/// html5ever recovers from any input, so malformed markup only ever yields
/// empty or default fields. `is_https` comes from the requested URL, not from
/// the response.
pub fn extract_facts(html: &str, page_url: &Url) -> PageFacts {
    let document = Html::parse_document(html);

    let title = page_title(&document)
        .map(|t| t.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let meta_description = first_meta(&document, "description")
        .and_then(|m| m.value().attr("content"))
        .map(|c| c.trim().to_string())
        .unwrap_or_default();

    let h1_texts: Vec<String> = select(&document, &H1)
        .map(|h| collapse_whitespace(&h.text().collect::<String>()))
        .collect();
    let h2_count = select(&document, &H2).count();

    let (image_count, images_with_alt) =
        select(&document, &IMG).fold((0, 0), |(total, with_alt), img| {
            let has_alt = img.value().attr("alt").is_some();
            (total + 1, with_alt + usize::from(has_alt))
        });

    // rel is a token list, e.g. rel="canonical nofollow"
    let has_canonical = select(&document, &LINK).any(|l| {
        l.value().attr("rel").is_some_and(|rel| {
            rel.split_whitespace()
                .any(|token| token.eq_ignore_ascii_case("canonical"))
        })
    });
    let has_viewport = first_meta(&document, "viewport").is_some();
    let has_robots_meta = first_meta(&document, "robots").is_some();
    let has_structured_data =
        select(&document, &SCRIPT).any(|s| attr_eq(&s, "type", "application/ld+json"));

    let facts = PageFacts {
        title_length: title.chars().count(),
        title,
        meta_description_length: meta_description.chars().count(),
        meta_description,
        h1_count: h1_texts.len(),
        h1_texts,
        h2_count,
        image_count,
        images_with_alt,
        has_canonical,
        has_robots_meta,
        has_viewport,
        has_structured_data,
        is_https: is_https(page_url),
    };

    debug!(
        "Extracted facts for {}: title={} chars, h1={}, images={}/{}",
        page_url, facts.title_length, facts.h1_count, facts.images_with_alt, facts.image_count
    );
    facts
}
