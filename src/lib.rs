pub mod feed;
pub mod logging;
pub mod render;
pub mod watch;

pub const TARGET_FEED_FETCH: &str = "feed_fetch";
pub const TARGET_FEED_DECODE: &str = "feed_decode";
