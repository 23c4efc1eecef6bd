mod download;
mod session;

use anyhow::Result;
use chain_listing::ListingFetcher;
use clap::Parser;
use colored::Colorize;
use std::io;
use tracing::info;

use download::WgetDownloader;

/// Browse and download UCSC liftOver chain files for a genome build
#[derive(Parser)]
#[command(name = "liftover-fetch", version)]
struct Args {
    /// Source genome build identifier (e.g. hg19)
    build: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    info!("Fetching chain file listing for build {}", args.build);

    let fetcher = ListingFetcher::new()?;
    let listing = fetcher.fetch(&args.build).await?;

    if listing.is_empty() {
        println!("{}", format!("No chain files found for build {}", args.build).yellow());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    let mut downloader = WgetDownloader::new();
    session::run(&listing, &mut input, &mut out, &mut downloader)?;

    println!("{}", "Goodbye!".cyan());
    Ok(())
}
