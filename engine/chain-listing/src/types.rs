use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single downloadable chain file from a liftOver directory listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainFileEntry {
    /// Short destination-build name (e.g. "PanTro4")
    pub target: String,
    /// Scheme-less download location (host/path/filename)
    pub url: String,
}

/// All chain files advertised for one source build
///
/// Iteration order is insertion order. Inserting a target that already
/// exists replaces the stored URL but keeps the original position, so a
/// listing with duplicate filenames resolves to the last occurrence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainListing {
    /// Source build the listing was fetched for (e.g. "hg19")
    pub build: String,
    /// When this listing was fetched
    pub fetched_at: DateTime<Utc>,
    entries: Vec<ChainFileEntry>,
}

impl ChainListing {
    /// Create an empty listing for a source build
    pub fn new(build: String) -> Self {
        Self { build, fetched_at: Utc::now(), entries: Vec::new() }
    }

    /// Add or replace an entry
    pub fn insert(&mut self, target: String, url: String) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.target == target) {
            existing.url = url;
        } else {
            self.entries.push(ChainFileEntry { target, url });
        }
    }

    /// Look up the download URL for a target name
    pub fn get(&self, target: &str) -> Option<&str> {
        self.entries.iter().find(|e| e.target == target).map(|e| e.url.as_str())
    }

    /// Target names in insertion order
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.target.as_str())
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[ChainFileEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
