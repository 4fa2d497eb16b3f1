use anyhow::{bail, Result};
use clap::Parser;

use blotter::feed::{build_http_client, is_valid_url, DEFAULT_FEED_URL};
use blotter::logging;
use blotter::watch;

/// Terminal watcher for county 911 incident feeds.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Feed URL to poll
    #[arg(default_value = DEFAULT_FEED_URL)]
    url: String,

    /// Accept invalid TLS certificates when fetching the feed.
    ///
    /// This disables peer verification entirely; only use it for a feed
    /// served with a broken certificate chain.
    #[arg(long)]
    insecure: bool,

    /// Show link, description, GUID and coordinates for each incident
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::configure_logging();

    let cli = Cli::parse();

    if !is_valid_url(&cli.url) {
        bail!("'{}' is not an http(s) URL", cli.url);
    }

    let client = build_http_client(cli.insecure)?;
    watch::watch_loop(&client, &cli.url, cli.verbose).await;

    Ok(())
}
