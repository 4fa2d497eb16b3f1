//! HTTP client creation and request handling for the incident feed.

use reqwest::{cookie::Jar, header};
use std::sync::Arc;
use tracing::{debug, warn};

use super::types::{FetchError, REQUEST_TIMEOUT};
use crate::TARGET_FEED_FETCH;

/// Helper function to validate a URL
pub fn is_valid_url(url: &str) -> bool {
    if let Ok(parsed) = url::Url::parse(url) {
        parsed.scheme() == "http" || parsed.scheme() == "https"
    } else {
        false
    }
}

/// Create the client used for every polling cycle.
///
/// `insecure` disables TLS peer verification, for feeds served with a broken
/// certificate chain. It is strictly opt-in and logged loudly when set.
pub fn build_http_client(insecure: bool) -> Result<reqwest::Client, FetchError> {
    let cookie_store = Jar::default();
    let mut builder = reqwest::Client::builder()
        .cookie_store(true)
        .cookie_provider(Arc::new(cookie_store))
        .gzip(true)
        .timeout(REQUEST_TIMEOUT)
        .redirect(reqwest::redirect::Policy::default());

    if insecure {
        warn!(
            target: TARGET_FEED_FETCH,
            "TLS peer verification disabled; the feed server's certificate will not be checked"
        );
        builder = builder.danger_accept_invalid_certs(true);
    }

    builder.build().map_err(FetchError::Client)
}

/// Fetch the feed once, returning the raw response body.
///
/// No retries here: a failed cycle is reported by the caller and the poll
/// interval is the only throttle.
pub async fn fetch_feed(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    debug!(target: TARGET_FEED_FETCH, "Loading incident feed from {}", url);

    let response = client
        .get(url)
        .header(
            header::ACCEPT,
            "application/rss+xml, application/xml, text/xml, */*;q=0.9",
        )
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    if !response.status().is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let body = response.text().await.map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })?;

    debug!(target: TARGET_FEED_FETCH, "Fetched {} bytes from {}", body.len(), url);
    Ok(body)
}
