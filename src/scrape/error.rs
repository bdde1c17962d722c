use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;

#[derive(Debug)]
pub enum ScrapeError {
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    Client(reqwest::Error),
    Http {
        url: String,
        source: reqwest::Error,
    },
    Timeout {
        url: String,
    },
    Status {
        url: String,
        status: StatusCode,
    },
    MissingSelector {
        field: String,
        url: String,
    },
    FieldParse {
        field: &'static str,
        raw: String,
        url: String,
    },
    OutputPath {
        path: PathBuf,
    },
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Encode(serde_json::Error),
}

impl ScrapeError {
    pub fn missing(field: impl Into<String>, url: impl Into<String>) -> Self {
        ScrapeError::MissingSelector { field: field.into(), url: url.into() }
    }

    pub(crate) fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ScrapeError::Timeout { url: url.to_string() }
        } else {
            ScrapeError::Http { url: url.to_string(), source: err }
        }
    }

    /// Stable tag used in logs and the run summary.
    pub fn category(&self) -> &'static str {
        match self {
            ScrapeError::InvalidUrl { .. } => "config",
            ScrapeError::Client(_)
            | ScrapeError::Http { .. }
            | ScrapeError::Timeout { .. }
            | ScrapeError::Status { .. } => "network",
            ScrapeError::MissingSelector { .. } => "missing_selector",
            ScrapeError::FieldParse { .. } => "field_parse",
            ScrapeError::OutputPath { .. } => "output_path",
            ScrapeError::Io { .. } => "io",
            ScrapeError::Encode(_) => "encode",
        }
    }
}

impl std::fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScrapeError::InvalidUrl { url, source } => write!(f, "invalid url {url:?}: {source}"),
            ScrapeError::Client(err) => write!(f, "http client setup failed: {err}"),
            ScrapeError::Http { url, source } => write!(f, "http error for {url}: {source}"),
            ScrapeError::Timeout { url } => write!(f, "request to {url} timed out"),
            ScrapeError::Status { url, status } => write!(f, "http status {status} for {url}"),
            ScrapeError::MissingSelector { field, url } => {
                write!(f, "missing markup for {field} on {url}")
            }
            ScrapeError::FieldParse { field, raw, url } => {
                write!(f, "field {field} is not a number ({raw:?}) on {url}")
            }
            ScrapeError::OutputPath { path } => write!(f, "{} does not exist", path.display()),
            ScrapeError::Io { path, source } => write!(f, "io error on {}: {source}", path.display()),
            ScrapeError::Encode(err) => write!(f, "encode error: {err}"),
        }
    }
}

impl std::error::Error for ScrapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScrapeError::InvalidUrl { source, .. } => Some(source),
            ScrapeError::Client(err) => Some(err),
            ScrapeError::Http { source, .. } => Some(source),
            ScrapeError::Io { source, .. } => Some(source),
            ScrapeError::Encode(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_field_and_url() {
        let err = ScrapeError::missing("summary.pantheon", "https://smite.fandom.com/wiki/Ares");
        assert_eq!(
            format!("{err}"),
            "missing markup for summary.pantheon on https://smite.fandom.com/wiki/Ares"
        );
        assert_eq!(err.category(), "missing_selector");
    }

    #[test]
    fn output_path_message_matches_missing_directory() {
        let err = ScrapeError::OutputPath { path: PathBuf::from("out/gods.json") };
        assert_eq!(format!("{err}"), "out/gods.json does not exist");
        assert_eq!(err.category(), "output_path");
    }

    #[test]
    fn status_is_a_network_failure() {
        let err = ScrapeError::Status { url: "https://x/wiki/Zeus".into(), status: StatusCode::NOT_FOUND };
        assert_eq!(err.category(), "network");
        assert_eq!(format!("{err}"), "http status 404 Not Found for https://x/wiki/Zeus");
    }
}
