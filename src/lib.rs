//! # Ephe-dl Library
//!
//! A small library for mirroring Swiss Ephemeris data files from an HTTP
//! directory listing: fetch the index page, extract anchor targets, filter
//! them against the ephemeris filename pattern, and download each match.
//!
//! ## Features
//!
//! - **One-shot batch fetch**: listing fetch, filter, sequential downloads
//! - **Structured results**: per-run counts and per-file outcomes
//! - **Testable core**: network access behind a replaceable [`Fetch`] trait
//! - **Progress tracking**: optional progress callbacks for custom UIs
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Mirror the default listing into the current directory
//!     let report = ephe_dl::mirror(None, None).await?;
//!     println!("{} downloaded, {} failed", report.downloaded, report.failed);
//!
//!     // Mirror a custom listing into a specific directory
//!     ephe_dl::mirror(Some("http://example.com/ephe/"), Some("./ephe")).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Progress Tracking
//!
//! ```rust,no_run
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     ephe_dl::mirror_with_progress(None, None, |done, total| {
//!         println!("Progress: {}/{} files", done, total);
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;
use std::sync::Arc;

// Re-export core types that users might need
pub use crate::core::error::{Error, Result};
pub use crate::core::fetch::{Fetch, FetchResponse, HttpFetch};
pub use crate::core::listing::{extract_links, matched_filenames, Link};
pub use crate::core::mirror::{FileOutcome, FileStatus, Mirror, MirrorOptions, MirrorReport};
pub use crate::core::pattern::is_ephemeris_file;
pub use crate::core::source::{SourceConfig, DEFAULT_BASE_URL};

// Internal modules
mod core;

fn build_mirror(base_url: Option<&str>) -> Mirror {
    match base_url {
        Some(url) => Mirror::with_config(SourceConfig {
            base_url: url.to_string(),
        }),
        None => Mirror::new(),
    }
}

fn build_options(dest: Option<&str>) -> MirrorOptions {
    MirrorOptions {
        dest_dir: dest.map(PathBuf::from),
        ..Default::default()
    }
}

/// Mirror ephemeris files from a listing page
///
/// # Arguments
/// * `base_url` - Listing URL; `None` uses the default Swiss Ephemeris listing
/// * `dest` - Destination directory; `None` uses the current working directory
///
/// # Examples
/// ```rust,no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = ephe_dl::mirror(None, Some("./ephe")).await?;
/// assert_eq!(report.downloaded + report.failed + report.skipped, report.matched);
/// # Ok(())
/// # }
/// ```
pub async fn mirror(base_url: Option<&str>, dest: Option<&str>) -> Result<MirrorReport> {
    build_mirror(base_url).run(&build_options(dest)).await
}

/// Mirror with progress tracking
///
/// The callback receives `(files_completed, files_matched)` after each
/// processed file.
pub async fn mirror_with_progress<F>(
    base_url: Option<&str>,
    dest: Option<&str>,
    progress: F,
) -> Result<MirrorReport>
where
    F: Fn(u64, u64) + Send + Sync + 'static,
{
    let mut options = build_options(dest);
    options.progress = Some(Arc::new(progress));
    build_mirror(base_url).run(&options).await
}

/// Mirror with full control over options
pub async fn mirror_with_options(
    base_url: Option<&str>,
    options: MirrorOptions,
) -> Result<MirrorReport> {
    build_mirror(base_url).run(&options).await
}

/// Fetch the listing and return matched filenames without downloading
///
/// Backs the CLI `--dry-run` flag.
pub async fn list_matches(base_url: Option<&str>) -> Result<Vec<String>> {
    build_mirror(base_url).list_matches().await
}
