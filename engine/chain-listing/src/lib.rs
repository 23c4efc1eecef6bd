pub mod listing;
pub mod types;

pub use listing::{parse_listing, ListingFetcher};
pub use types::{ChainFileEntry, ChainListing};
