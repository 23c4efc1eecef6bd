use anyhow::{Context, Result};
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{info, warn};

use crate::types::ChainListing;

const LISTING_HOST: &str = "hgdownload.soe.ucsc.edu";
const CHAIN_SUFFIX: &str = ".over.chain.gz";

/// Number of leading characters stripped from a chain filename to get the
/// target name. This assumes an "hgNN"-style source build: "hg19To" is six
/// characters. Longer build names (e.g. "hg100") shift the boundary and
/// truncate the target name. Kept as a fixed offset to match the filenames
/// the UCSC listing actually serves.
const TARGET_NAME_OFFSET: usize = 6;

/// Fetches the UCSC liftOver directory listing for a source build
pub struct ListingFetcher {
    client: Client,
    base_url: String,
}

impl ListingFetcher {
    /// Create a new listing fetcher against the UCSC download server
    pub fn new() -> Result<Self> {
        Self::with_base_url(format!("https://{LISTING_HOST}"))
    }

    /// Create a listing fetcher against a different server root
    pub fn with_base_url(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Fetch and parse the chain file listing for a source build
    pub async fn fetch(&self, build: &str) -> Result<ChainListing> {
        let url = format!("{}/goldenPath/{build}/liftOver/", self.base_url);
        info!("Fetching chain file listing from: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch liftOver directory listing")?;

        if !response.status().is_success() {
            anyhow::bail!("Listing request failed with status: {}", response.status());
        }

        let html = response.text().await.context("Failed to read listing body")?;
        info!("Successfully fetched listing ({} bytes)", html.len());

        let listing = parse_listing(build, &html);
        if listing.is_empty() {
            warn!("No chain files found in listing for build {}", build);
        } else {
            info!("Found {} chain files for build {}", listing.len(), build);
        }

        Ok(listing)
    }
}

/// Parse a directory listing page into a chain file listing
///
/// Selects anchors whose href starts with "hg" and takes the anchor text as
/// the filename. Anchors that do not match contribute nothing; a page with
/// no matches yields an empty listing.
pub fn parse_listing(build: &str, html: &str) -> ChainListing {
    let mut listing = ChainListing::new(build.to_string());
    let document = Html::parse_document(html);

    let anchor_selector =
        Selector::parse(r#"a[href^="hg"]"#).expect("Failed to create anchor selector");

    for anchor in document.select(&anchor_selector) {
        let filename: String = anchor.text().collect();
        let filename = filename.trim();
        if filename.is_empty() {
            continue;
        }

        let target = target_name(filename);
        let url = format!("{LISTING_HOST}/goldenPath/{build}/liftOver/{filename}");
        listing.insert(target, url);
    }

    listing
}

/// Derive the short target-build name from a chain filename
///
/// "hg19ToPanTro4.over.chain.gz" becomes "PanTro4": the trailing suffix is
/// stripped if present, then the first six characters are dropped.
fn target_name(filename: &str) -> String {
    let stem = filename.strip_suffix(CHAIN_SUFFIX).unwrap_or(filename);
    stem.get(TARGET_NAME_OFFSET..).unwrap_or("").to_string()
}
