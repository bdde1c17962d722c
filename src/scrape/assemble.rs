use futures::future::try_join_all;
use scraper::Html;
use tracing::debug;

use crate::config::Site;
use super::error::ScrapeError;
use super::fetch::PageFetcher;
use super::listing::extract_listing_links;
use super::navigation::{neighbor_icon, neighbor_link, Slot};
use super::record::extract_record;
use super::types::GodRecord;

/// Where a record sits in the collection; decides which neighbors it has.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Only,
    First,
    Interior,
    Last,
}

impl Position {
    pub fn of(index: usize, len: usize) -> Self {
        match (index, len) {
            (_, 1) => Position::Only,
            (0, _) => Position::First,
            (i, n) if i + 1 == n => Position::Last,
            _ => Position::Interior,
        }
    }
}

pub async fn fetch_listing<F: PageFetcher + ?Sized>(fetcher: &F, site: &Site) -> Result<Vec<String>, ScrapeError> {
    let page = site.listing.as_str();
    let body = fetcher.fetch(page).await?;
    let doc = Html::parse_document(&body);
    extract_listing_links(&doc, &site.base, page)
}

/// Pass 1: every detail page at once. Output keeps the order of `links`; the
/// first failure aborts the lot.
pub async fn collect_records<F: PageFetcher + ?Sized>(
    fetcher: &F,
    site: &Site,
    links: &[String],
) -> Result<Vec<GodRecord>, ScrapeError> {
    try_join_all(links.iter().map(|link| async move {
        let body = fetcher.fetch(link).await?;
        let doc = Html::parse_document(&body);
        extract_record(&doc, link, &site.base)
    }))
    .await
}

/// Pass 2: neighbor links and icons, concurrent across records.
pub async fn link_neighbors<F: PageFetcher + ?Sized>(
    fetcher: &F,
    site: &Site,
    records: Vec<GodRecord>,
) -> Result<Vec<GodRecord>, ScrapeError> {
    let len = records.len();
    try_join_all(
        records
            .into_iter()
            .enumerate()
            .map(|(i, record)| link_one(fetcher, site, record, Position::of(i, len))),
    )
    .await
}

async fn link_one<F: PageFetcher + ?Sized>(
    fetcher: &F,
    site: &Site,
    mut record: GodRecord,
    position: Position,
) -> Result<GodRecord, ScrapeError> {
    if position == Position::Only {
        return Ok(record);
    }

    let body = fetcher.fetch(&record.link).await?;
    // The icon for this record is on a neighbor's page, in the slot pointing back here.
    let (prev, next, source, slot) = {
        let doc = Html::parse_document(&body);
        let read = |slot| neighbor_link(&doc, slot, &site.base, &record.link);
        match position {
            Position::First => {
                let next = read(Slot::Next)?;
                (None, Some(next.clone()), next, Slot::Previous)
            }
            Position::Last => {
                let prev = read(Slot::Previous)?;
                (Some(prev.clone()), None, prev, Slot::Next)
            }
            _ => {
                let prev = read(Slot::Previous)?;
                let next = read(Slot::Next)?;
                (Some(prev.clone()), Some(next), prev, Slot::Next)
            }
        }
    };
    debug!(god = %record.name, neighbor = %source, "icon");
    let body = fetcher.fetch(&source).await?;
    let icon = {
        let doc = Html::parse_document(&body);
        neighbor_icon(&doc, slot, &source)?
    };

    record.prev_link = prev;
    record.next_link = next;
    record.icon_url = Some(icon);
    Ok(record)
}

/// Indices `i` where records `i` and `i + 1` do not point at each other.
pub fn broken_links(records: &[GodRecord]) -> Vec<usize> {
    records
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| {
            pair[0].next_link.as_deref() != Some(pair[1].link.as_str())
                || pair[1].prev_link.as_deref() != Some(pair[0].link.as_str())
        })
        .map(|(i, _)| i)
        .collect()
}
