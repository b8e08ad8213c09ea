//! Core mirroring logic for ephe-dl
//!
//! Runs the whole listing-fetch, filter, download loop and reports a
//! structured per-run result. Network access goes through the injectable
//! [`Fetch`] capability so the run logic is testable without real I/O.

use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, warn};

use crate::core::error::{Error, Result};
use crate::core::fetch::{Fetch, FetchResponse, HttpFetch};
use crate::core::listing::matched_filenames;
use crate::core::source::SourceConfig;

/// Progress callback: receives (files completed, files matched)
pub type ProgressCallback = Arc<dyn Fn(u64, u64) + Send + Sync>;

/// Options for a mirror run
#[derive(Default)]
pub struct MirrorOptions {
    /// Directory downloaded files are written into; defaults to the
    /// current working directory
    pub dest_dir: Option<PathBuf>,

    /// Optional progress callback, invoked once per processed file
    pub progress: Option<ProgressCallback>,
}

/// Final state of one matched filename
#[derive(Debug, Clone, PartialEq)]
pub enum FileStatus {
    /// Body fetched and written to disk
    Saved,
    /// Fetch or write failed; the run continued
    Failed(String),
    /// Name refused before any fetch (unsafe on the local filesystem)
    Skipped(String),
}

/// Per-file outcome, in listing document order
#[derive(Debug, Clone, PartialEq)]
pub struct FileOutcome {
    pub name: String,
    pub status: FileStatus,
}

/// Structured result of a completed mirror run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MirrorReport {
    /// Hrefs that matched the ephemeris pattern
    pub matched: usize,
    /// Files fetched and written successfully
    pub downloaded: usize,
    /// Files whose fetch or write failed
    pub failed: usize,
    /// Matched names refused before fetching
    pub skipped: usize,
    /// Per-file outcomes in document order
    pub outcomes: Vec<FileOutcome>,
}

/// High-level mirrorer for one ephemeris directory listing
pub struct Mirror {
    config: SourceConfig,
    fetch: Arc<dyn Fetch>,
}

impl Default for Mirror {
    fn default() -> Self {
        Self::new()
    }
}

impl Mirror {
    /// Create a mirrorer for the default listing URL over HTTP
    pub fn new() -> Self {
        Self::with_config(SourceConfig::default())
    }

    /// Create a mirrorer with a custom source configuration
    pub fn with_config(config: SourceConfig) -> Self {
        Self {
            config,
            fetch: Arc::new(HttpFetch),
        }
    }

    /// Create a mirrorer with a custom fetch capability
    ///
    /// This is how tests substitute in-memory fakes for the network.
    pub fn with_fetch(config: SourceConfig, fetch: Arc<dyn Fetch>) -> Self {
        Self { config, fetch }
    }

    /// Fetch the listing and return the matched filenames without
    /// downloading anything
    pub async fn list_matches(&self) -> Result<Vec<String>> {
        let html = self.fetch_listing().await?;
        Ok(matched_filenames(&html))
    }

    /// Run the full mirror: fetch listing, filter, download each match.
    ///
    /// A non-success listing status is fatal: the contract line
    /// `Error accessing URL: <status>` is printed and
    /// [`Error::ListingFailed`] returned before any file fetch. Per-file
    /// failures are reported and the loop continues.
    pub async fn run(&self, options: &MirrorOptions) -> Result<MirrorReport> {
        let html = match self.fetch.get(&self.config.base_url).await? {
            FetchResponse::Body(body) => String::from_utf8_lossy(&body).into_owned(),
            FetchResponse::HttpStatus(status) => {
                println!("Error accessing URL: {status}");
                return Err(Error::ListingFailed(status));
            }
        };

        let names = matched_filenames(&html);
        debug!("Listing yielded {} matched file(s)", names.len());

        let dest_dir = options
            .dest_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        if !dest_dir.as_os_str().is_empty() {
            tokio::fs::create_dir_all(&dest_dir).await?;
        }

        let total = names.len() as u64;
        let mut report = MirrorReport {
            matched: names.len(),
            ..Default::default()
        };

        for (index, name) in names.into_iter().enumerate() {
            let status = self.download_one(&name, &dest_dir).await;

            match &status {
                FileStatus::Saved => report.downloaded += 1,
                FileStatus::Failed(_) => report.failed += 1,
                FileStatus::Skipped(_) => report.skipped += 1,
            }
            report.outcomes.push(FileOutcome { name, status });

            if let Some(ref progress) = options.progress {
                progress(index as u64 + 1, total);
            }
        }

        Ok(report)
    }

    /// Fetch the listing page body as text
    async fn fetch_listing(&self) -> Result<String> {
        match self.fetch.get(&self.config.base_url).await? {
            FetchResponse::Body(body) => Ok(String::from_utf8_lossy(&body).into_owned()),
            FetchResponse::HttpStatus(status) => Err(Error::ListingFailed(status)),
        }
    }

    /// Fetch one matched file and write it under `dest_dir`
    async fn download_one(&self, name: &str, dest_dir: &std::path::Path) -> FileStatus {
        if !is_safe_name(name) {
            warn!("Refusing unsafe file name from listing: {name:?}");
            return FileStatus::Skipped("unsafe file name".to_string());
        }

        let url = self.config.file_url(name);
        match self.fetch.get(&url).await {
            Ok(FetchResponse::Body(body)) => {
                // Full body is in hand before the write starts; an existing
                // file of the same name is overwritten
                if let Err(e) = tokio::fs::write(dest_dir.join(name), &body).await {
                    println!("Error downloading {name}: {e}");
                    return FileStatus::Failed(e.to_string());
                }
                println!("Downloaded: {name}");
                FileStatus::Saved
            }
            Ok(FetchResponse::HttpStatus(status)) => {
                println!("Error downloading {name}: {status}");
                FileStatus::Failed(format!("HTTP status {status}"))
            }
            Err(e) => {
                println!("Error downloading {name}: {e}");
                FileStatus::Failed(e.to_string())
            }
        }
    }
}

/// A listing href is used verbatim as the local file name, so anything
/// that could leave the destination directory is refused outright.
fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains('\0')
        && name != "."
        && name != ".."
}
