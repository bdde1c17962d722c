use scraper::{Html, Selector};
use url::Url;

use super::error::ScrapeError;
use super::normalize::{absolute_url, canonical_image_url};

/// The two halves of a detail page's navigation strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Previous,
    Next,
}

impl Slot {
    fn nth(self) -> usize {
        match self { Slot::Previous => 1, Slot::Next => 2 }
    }

    fn link_selector(self) -> String {
        format!(".blue-window > p:nth-child(1) > span:nth-child({}) > a:nth-child(1)", self.nth())
    }

    fn icon_selector(self) -> String {
        format!(
            ".blue-window > p:nth-child(1) > span:nth-child({}) > span:nth-child(2) > a:nth-child(1) > img:nth-child(1)",
            self.nth()
        )
    }

    fn field(self) -> &'static str {
        match self { Slot::Previous => "prev_link", Slot::Next => "next_link" }
    }
}

/// Absolute URL of the neighbor in `slot`.
pub fn neighbor_link(doc: &Html, slot: Slot, base: &Url, page: &str) -> Result<String, ScrapeError> {
    let sel = Selector::parse(&slot.link_selector()).map_err(|_| ScrapeError::missing(slot.field(), page))?;
    let href = doc
        .select(&sel)
        .next()
        .and_then(|a| a.value().attr("href"))
        .ok_or_else(|| ScrapeError::missing(slot.field(), page))?;
    absolute_url(base, href.trim())
}

/// Icon shown for the neighbor in `slot`. The wiki only renders a god's icon
/// on the pages next to it, so callers read it from a neighbor's page.
pub fn neighbor_icon(doc: &Html, slot: Slot, page: &str) -> Result<String, ScrapeError> {
    let sel = Selector::parse(&slot.icon_selector()).map_err(|_| ScrapeError::missing("icon_url", page))?;
    doc.select(&sel)
        .next()
        .and_then(|img| img.value().attr("data-src"))
        .map(canonical_image_url)
        .ok_or_else(|| ScrapeError::missing("icon_url", page))
}
