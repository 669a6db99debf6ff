//! HTML parser for extracting image and link references
//!
//! This module parses fetched page content into an immutable [`ParsedPage`]
//! value, decoupling the traversal engine from the HTML parser library.
//! Extraction is mechanical: it pulls out candidate references and leaves
//! all join/reject decisions to the URL normalizer.

use scraper::{Html, Selector};

/// Image suffixes accepted by the extractor (case-sensitive)
const IMAGE_SUFFIXES: &[&str] = &[".jpg", ".jpeg", ".png"];

/// Extracted references from an HTML page
///
/// Immutable once constructed; the engine only ever reads it through the
/// accessors.
#[derive(Debug, Clone)]
pub struct ParsedPage {
    images: Vec<String>,
    links: Vec<String>,
}

impl ParsedPage {
    /// Image references found on the page, in document order.
    ///
    /// Values are the raw `src` attributes, recorded verbatim: no
    /// normalization, no query-string stripping.
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Raw href strings, one per `<a>` element carrying an `href`
    /// attribute, in document order. Unfiltered; rejection happens in the
    /// normalizer.
    pub fn links(&self) -> &[String] {
        &self.links
    }
}

/// Parses HTML content and extracts image and link references
///
/// # Extraction Rules
///
/// **Images:** `<img src="...">` where the src value ends in `.jpg`,
/// `.jpeg`, or `.png`. The suffix match is case-sensitive, so `.PNG` and
/// `pic.png?size=2` are both excluded.
///
/// **Links:** every `<a>` element with an `href` attribute contributes its
/// raw href string, including relative and empty values.
///
/// # Example
///
/// ```
/// use imagetrawl::crawler::parse_page;
///
/// let html = r#"<html><body><img src="a.png"><a href="/next">Next</a></body></html>"#;
/// let page = parse_page(html);
/// assert_eq!(page.images(), ["a.png"]);
/// assert_eq!(page.links(), ["/next"]);
/// ```
pub fn parse_page(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        images: extract_images(&document),
        links: extract_links(&document),
    }
}

/// Extracts image references whose src matches an accepted suffix
fn extract_images(document: &Html) -> Vec<String> {
    let mut images = Vec::new();

    if let Ok(img_selector) = Selector::parse("img[src]") {
        for element in document.select(&img_selector) {
            if let Some(src) = element.value().attr("src") {
                if IMAGE_SUFFIXES.iter().any(|suffix| src.ends_with(suffix)) {
                    images.push(src.to_string());
                }
            }
        }
    }

    images
}

/// Extracts the raw href of every anchor that carries one
fn extract_links(document: &Html) -> Vec<String> {
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                links.push(href.to_string());
            }
        }
    }

    links
}
