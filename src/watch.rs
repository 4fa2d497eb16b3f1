//! The polling loop: fetch, decode, render, sleep.

use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::feed::{decode, fetch_feed, Event, POLL_INTERVAL};
use crate::render::{render_report, timestamp_line};
use crate::{TARGET_FEED_DECODE, TARGET_FEED_FETCH};

/// Poll `url` forever, re-rendering the report after every cycle.
///
/// Failures are cycle-local: a failed fetch or decode is logged and the
/// previous cycle's events are rendered again, so the display never goes
/// blank mid-run. Only process termination stops the loop.
pub async fn watch_loop(client: &reqwest::Client, url: &str, verbose: bool) {
    let mut events: Vec<Event> = Vec::new();

    loop {
        match fetch_feed(client, url).await {
            Ok(body) => match decode(&body) {
                Ok(fresh) => {
                    info!(target: TARGET_FEED_DECODE, "Feed updated: {} events", fresh.len());
                    events = fresh;
                }
                Err(err) => {
                    error!(
                        target: TARGET_FEED_DECODE,
                        "Failed to decode feed from {}: {}; keeping {} events from the last good cycle",
                        url,
                        err,
                        events.len()
                    );
                }
            },
            Err(err) => {
                error!(
                    target: TARGET_FEED_FETCH,
                    "Failed to fetch {}: {}; keeping {} events from the last good cycle",
                    url,
                    err,
                    events.len()
                );
            }
        }

        print!("{}", render_report(&events, verbose));
        println!("{}", timestamp_line());

        debug!("Sleeping for {}s before next fetch", POLL_INTERVAL.as_secs());
        sleep(POLL_INTERVAL).await;
    }
}
