use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Scrape;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Listing, Records, Link, Write }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Listing => "listing",
        Phase::Records => "records",
        Phase::Link => "link",
        Phase::Write => "write",
    }}
    fn span(&self) -> Span { match self {
        Phase::Listing => info_span!("listing"),
        Phase::Records => info_span!("records"),
        Phase::Link => info_span!("link"),
        Phase::Write => info_span!("write"),
    }}
}

impl OpMarker for Scrape {
    const NAME: &'static str = "scrape";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("scrape") }
}
