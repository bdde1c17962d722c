use tracing::Instrument;

use crate::config::ScrapeConfig;
use crate::telemetry::{self};
use crate::telemetry::ops::scrape::Phase as ScrapePhase;

pub mod assemble;
pub mod error;
pub mod fetch;
pub mod listing;
pub mod navigation;
pub mod normalize;
pub mod record;
pub mod types;
pub mod write;

#[cfg(test)]
mod fixtures;

use error::ScrapeError;
use fetch::{HttpFetcher, PageFetcher};
use types::ScrapeSummary;

/// Full cycle against the live site: list, extract, link, write.
pub async fn run(cfg: &ScrapeConfig) -> Result<ScrapeSummary, ScrapeError> {
    let fetcher = HttpFetcher::new(cfg)?;
    run_with(&fetcher, cfg).await
}

pub async fn run_with<F: PageFetcher + ?Sized>(fetcher: &F, cfg: &ScrapeConfig) -> Result<ScrapeSummary, ScrapeError> {
    let log = telemetry::scrape();
    let root = log.root_span_kv([
        ("base_url", cfg.base_url.clone()),
        ("output", cfg.output.display().to_string()),
        ("timeout_secs", cfg.timeout.as_secs().to_string()),
    ]);

    async {
        let site = cfg.site()?;

        log.info("📜 Getting list of gods...");
        let links = assemble::fetch_listing(fetcher, &site)
            .instrument(log.span_kv(&ScrapePhase::Listing, [("url", site.listing.to_string())]))
            .await?;
        log.listed(links.len());

        let records = assemble::collect_records(fetcher, &site, &links)
            .instrument(log.span(&ScrapePhase::Records))
            .await?;
        log.info("✅ God list retrieved.");

        let records = assemble::link_neighbors(fetcher, &site, records)
            .instrument(log.span(&ScrapePhase::Link))
            .await?;

        let broken = assemble::broken_links(&records);
        for &i in &broken {
            log.warn_kv("⚠️ neighbor links disagree", [
                ("left", records[i].link.clone()),
                ("right", records[i + 1].link.clone()),
            ]);
        }

        {
            let _s = log.span(&ScrapePhase::Write).entered();
            write::write_collection(&cfg.output, &records)?;
        }

        let output = cfg.output.display().to_string();
        log.totals(records.len(), broken.len(), &output);
        Ok::<_, ScrapeError>(ScrapeSummary { listed: links.len(), records: records.len(), broken_links: broken.len(), output })
    }
    .instrument(root)
    .await
}
