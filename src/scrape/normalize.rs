use url::Url;

use super::error::ScrapeError;

/// Stand-in for a value the page did not carry. Consumers match on it verbatim.
pub const MISSING: &str = "/undefined";

/// Drop every newline, then trim the ends. `None` becomes [`MISSING`].
pub fn normalize(raw: Option<&str>) -> String {
    match raw {
        Some(s) => s.replace('\n', "").trim().to_string(),
        None => MISSING.to_string(),
    }
}

/// Wiki image attributes point at a CDN revision (`.../Foo.png/revision/latest?cb=1`);
/// keep only the part before `/revision`.
pub fn canonical_image_url(raw: &str) -> String {
    let raw = raw.trim();
    match raw.find("/revision") {
        Some(i) if i + "/revision".len() < raw.len() => raw[..i].to_string(),
        _ => raw.to_string(),
    }
}

/// Normalized integer with thousands separators removed (`"1,200"` -> 1200).
pub fn parse_count(raw: &str) -> Option<u32> {
    normalize(Some(raw)).replace(',', "").parse::<u32>().ok()
}

pub fn absolute_url(base: &Url, href: &str) -> Result<String, ScrapeError> {
    base.join(href)
        .map(String::from)
        .map_err(|source| ScrapeError::InvalidUrl { url: href.to_string(), source })
}
