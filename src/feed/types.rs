//! Type definitions for the incident feed module.

use reqwest::StatusCode;
use thiserror::Error;
use tokio::time::Duration;

/// One incident from the feed.
///
/// An `Event` is built once from a single `<item>` node and never updated;
/// every polling cycle replaces the whole list.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub title: String,
    pub link: String,
    pub pub_date: String,
    pub description: String,
    pub guid: String,
    /// Status token extracted from `description`: `ONSCENE`, `DISPATCHED`,
    /// `WAITING`, or whatever else the county emits.
    pub status: String,
    /// Decimal degrees from `geo:lat`, sign prefix stripped.
    pub latitude: Option<f64>,
    /// Decimal degrees from `geo:long`, sign prefix stripped.
    pub longitude: Option<f64>,
}

/// Transport-level failures while fetching the feed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },
    #[error("{url} returned HTTP status {status}")]
    Status { url: String, status: StatusCode },
    #[error("failed to read response body from {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

/// Failures while decoding feed XML into events.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("feed is not well-formed XML: {0}")]
    Malformed(#[from] roxmltree::Error),
    #[error("feed has unexpected shape: no <{0}> element")]
    MissingElement(&'static str),
    #[error("item carries a malformed {field} value {value:?}")]
    BadCoordinate {
        field: &'static str,
        value: String,
        source: std::num::ParseFloatError,
    },
    #[error("description {0:?} is too short to carry a status token")]
    NoStatusToken(String),
}

// Constants
pub const DEFAULT_FEED_URL: &str = "https://www.monroecounty.gov/incidents911.rss";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const POLL_INTERVAL: Duration = Duration::from_secs(60);
