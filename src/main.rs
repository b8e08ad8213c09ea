//! # Ephe-dl CLI
//!
//! Command-line interface for the ephe-dl library.
//! Mirrors Swiss Ephemeris data files from an HTTP directory listing.

use clap::Parser;
use ephe_dl::{Error, MirrorOptions, Result, DEFAULT_BASE_URL};
use log::error;

mod cli;

/// Command-line interface for ephe-dl
#[derive(Parser)]
#[command(name = "ephe-dl")]
#[command(about = "Swiss Ephemeris data file mirroring tool with HTTP support")]
#[command(long_about = "Mirrors Swiss Ephemeris data files from a directory listing:
  ephe-dl                                    # Mirror the astro.com listing into the current directory
  ephe-dl --dest ./ephe                      # Mirror into ./ephe
  ephe-dl http://mirror.example.com/ephe/    # Mirror a custom listing
  ephe-dl --dry-run                          # Show what would be downloaded

Matched files are sepl_*.se1 (planetary), semo_*.se1 (lunar) and seplm18.se1;
existing files of the same name are overwritten.")]
#[command(version)]
struct Cli {
    /// Listing URL to mirror
    #[arg(default_value = DEFAULT_BASE_URL)]
    url: String,

    /// Directory downloaded files are written into
    #[arg(short, long, default_value = ".")]
    dest: String,

    /// Show what would be downloaded without downloading
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("❌ Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    if cli.verbose {
        eprintln!("🌘 Ephe-dl v{} starting...", env!("CARGO_PKG_VERSION"));
        eprintln!("🌐 Mirroring listing: {}", cli.url);
        eprintln!("📁 Saving to: {}", cli.dest);
    }

    if cli.dry_run {
        return dry_run(&cli.url).await;
    }

    mirror(&cli.url, &cli.dest).await
}

/// Fetch and filter only; print the matched set without downloading
async fn dry_run(url: &str) -> Result<()> {
    match ephe_dl::list_matches(Some(url)).await {
        Ok(matches) => {
            for name in &matches {
                eprintln!("🔍 [DRY RUN] Would download: {name}");
            }
            eprintln!("🔍 [DRY RUN] {} file(s) matched", matches.len());
            Ok(())
        }
        Err(Error::ListingFailed(status)) => {
            // Same fatal branch as a real run: report and exit normally
            println!("Error accessing URL: {status}");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Run the full mirror with a progress bar
async fn mirror(url: &str, dest: &str) -> Result<()> {
    let progress_manager = cli::ProgressManager::new(0, &format!("🌐 Mirroring {url}"));

    let options = MirrorOptions {
        dest_dir: Some(dest.into()),
        progress: Some(std::sync::Arc::new({
            let pb = progress_manager.pb.clone();
            move |done, total| {
                if pb.length().unwrap_or(0) != total {
                    pb.set_length(total);
                }
                pb.set_position(done);
                if done >= total {
                    pb.finish_with_message("✅ Mirror completed!");
                }
            }
        })),
    };

    match ephe_dl::mirror_with_options(Some(url), options).await {
        Ok(report) => {
            progress_manager.pb.finish_and_clear();
            eprintln!(
                "✅ {} matched, {} downloaded, {} failed",
                report.matched, report.downloaded, report.failed
            );
            Ok(())
        }
        // Fatal listing status: the contract line was already printed and
        // the process exits normally
        Err(Error::ListingFailed(_)) => {
            progress_manager.pb.finish_and_clear();
            Ok(())
        }
        Err(e) => Err(e),
    }
}
