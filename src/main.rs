use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use std::time::Instant;

mod config;
mod scrape;
mod telemetry;

use config::ScrapeConfig;

/// Running with no arguments scrapes the wiki into ./gods.json.
#[derive(Parser)]
#[command(name = "smite-gods", about = "Scrape the SMITE wiki god roster into a JSON file")]
struct Cli {
    /// Wiki origin (default https://smite.fandom.com, or GODS_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,
    /// Output file (default ./gods.json, or GODS_OUTPUT)
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Per-request timeout in seconds (default 20, or GODS_TIMEOUT_SECS)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,
    /// Emit a single JSON summary envelope to stdout; logs go to stderr
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    telemetry::config::set_json_mode(cli.json);
    let t0 = Instant::now();

    // initialize logging/tracing (stderr). Respect RUST_LOG and GODS_LOG_FORMAT
    telemetry::config::init_tracing();
    let cfg = ScrapeConfig::from_env().with_overrides(cli.base_url, cli.out, cli.timeout_secs);

    let log = telemetry::scrape();
    match scrape::run(&cfg).await {
        Ok(summary) => {
            if telemetry::config::json_mode() {
                log.result(&summary, t0.elapsed())?;
            }
            Ok(())
        }
        Err(err) => {
            log.error_kv("❌ scrape failed", [
                ("category", err.category().to_string()),
                ("error", err.to_string()),
            ]);
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_flag_is_rejected() {
        assert!(Cli::try_parse_from(["smite-gods", "--timeout-secs", "0"]).is_err());
        let cli = Cli::try_parse_from(["smite-gods", "--timeout-secs", "5"]).unwrap();
        assert_eq!(cli.timeout_secs, Some(5));
    }

    #[test]
    fn no_arguments_is_a_full_default_run() {
        let cli = Cli::try_parse_from(["smite-gods"]).unwrap();
        assert!(cli.base_url.is_none() && cli.out.is_none() && cli.timeout_secs.is_none() && !cli.json);
    }
}
