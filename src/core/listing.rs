//! Directory listing parsing for ephe-dl
//!
//! Extracts anchor targets from an HTML directory index and filters them
//! down to the ephemeris files worth mirroring.

use log::debug;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::core::pattern::is_ephemeris_file;

static ANCHOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("Failed to compile anchor selector"));

/// A hyperlink extracted from the listing page
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// Visible anchor text, whitespace-trimmed
    pub text: String,
    /// Target of the `href` attribute, verbatim
    pub href: String,
}

/// Extracts all anchors carrying an `href` attribute, in document order.
///
/// Anchors without an `href` are skipped entirely; a malformed document
/// never fails here, the parser recovers with whatever tree it can build.
pub fn extract_links(html: &str) -> Vec<Link> {
    let document = Html::parse_document(html);

    document
        .select(&ANCHOR)
        .filter_map(|element| match element.value().attr("href") {
            Some(href) => Some(Link {
                text: element.text().collect::<String>().trim().to_string(),
                href: href.to_string(),
            }),
            None => {
                debug!("Skipping anchor without href attribute");
                None
            }
        })
        .collect()
}

/// Returns the hrefs that name ephemeris files, in document order.
///
/// No deduplication: a href repeated in the listing appears once per
/// occurrence, matching what a run would actually download.
pub fn matched_filenames(html: &str) -> Vec<String> {
    extract_links(html)
        .into_iter()
        .filter(|link| is_ephemeris_file(&link.href))
        .map(|link| link.href)
        .collect()
}
