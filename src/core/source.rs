//! Source configuration for ephe-dl
//!
//! Holds the listing URL to mirror and resolves per-file download URLs.

/// Default Swiss Ephemeris directory listing
pub const DEFAULT_BASE_URL: &str = "http://www.astro.com/ftp/swisseph/ephe/";

/// Configuration for the mirror source
#[derive(Debug, Clone, PartialEq)]
pub struct SourceConfig {
    /// URL of the directory listing page
    pub base_url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl SourceConfig {
    /// Resolves the download URL for a file named in the listing.
    ///
    /// Listing hrefs are relative filenames, so the download URL is the
    /// base URL with the name appended (inserting a slash if the base
    /// lacks a trailing one).
    pub fn file_url(&self, name: &str) -> String {
        if self.base_url.ends_with('/') {
            format!("{}{}", self.base_url, name)
        } else {
            format!("{}/{}", self.base_url, name)
        }
    }
}
