use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::error::ScrapeError;
use super::normalize::absolute_url;

const TABLES: &str = ".blue-window > tbody";
const NAME_LINK: &str = "td:nth-child(2) > a";

/// Detail-page URLs from the god list tables, top to bottom. The first row of
/// every table is its header.
pub fn extract_listing_links(doc: &Html, base: &Url, page: &str) -> Result<Vec<String>, ScrapeError> {
    let table_sel = Selector::parse(TABLES).map_err(|_| ScrapeError::missing("listing table", page))?;
    let link_sel = Selector::parse(NAME_LINK).map_err(|_| ScrapeError::missing("listing link", page))?;

    let tables: Vec<_> = doc.select(&table_sel).collect();
    if tables.is_empty() {
        return Err(ScrapeError::missing("listing table", page));
    }

    let mut links = Vec::new();
    for (t, table) in tables.iter().enumerate() {
        let rows = table
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "tr");
        for (i, row) in rows.enumerate().skip(1) {
            let href = row
                .select(&link_sel)
                .next()
                .and_then(|a| a.value().attr("href"))
                .ok_or_else(|| ScrapeError::missing(format!("listing table {} row {}", t + 1, i + 1), page))?;
            links.push(absolute_url(base, href.trim())?);
        }
    }
    Ok(links)
}
