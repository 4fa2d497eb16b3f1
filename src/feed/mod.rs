//! Incident feed processing module for blotter.
//!
//! This module handles the fetching and decoding of the 911 incident feed.

mod client;
mod parser;
mod types;

pub use self::types::*;

pub use self::client::{build_http_client, fetch_feed, is_valid_url};
pub use self::parser::{decode, status_from_description};
