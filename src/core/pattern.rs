//! Ephemeris filename matching for ephe-dl
//!
//! Decides which hrefs from a directory listing are Swiss Ephemeris data
//! files worth mirroring: `sepl_*.se1` (planetary), `semo_*.se1` (lunar),
//! plus the combined `seplm18.se1` file.

use once_cell::sync::Lazy;
use regex::Regex;

/// The combined planetary/lunar file carries a name the main pattern
/// does not cover (no underscore after the prefix).
pub const COMBINED_FILE: &str = "seplm18.se1";

/// Anchored over the whole string so names that merely contain a
/// `sepl_`/`semo_` fragment (e.g. `backup_sepl_18.se1.old`) never match.
static EPHEMERIS_FILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\Ase(pl|mo)_.*\.se1\z").expect("Failed to compile ephemeris filename pattern")
});

/// Returns true if `name` is an ephemeris file that should be mirrored.
pub fn is_ephemeris_file(name: &str) -> bool {
    name == COMBINED_FILE || EPHEMERIS_FILE.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planetary_files_match() {
        assert!(is_ephemeris_file("sepl_18.se1"));
        assert!(is_ephemeris_file("sepl_00.se1"));
        assert!(is_ephemeris_file("sepl_long-name.se1"));
    }

    #[test]
    fn test_lunar_files_match() {
        assert!(is_ephemeris_file("semo_18.se1"));
        assert!(is_ephemeris_file("semo_24.se1"));
    }

    #[test]
    fn test_combined_file_matches_literally() {
        assert!(is_ephemeris_file("seplm18.se1"));
        // Only the exact literal; close variants are not covered
        assert!(!is_ephemeris_file("seplm24.se1"));
        assert!(!is_ephemeris_file("seplm18.se2"));
    }

    #[test]
    fn test_empty_infix_matches() {
        // `.*` admits the empty string
        assert!(is_ephemeris_file("sepl_.se1"));
        assert!(is_ephemeris_file("semo_.se1"));
    }

    #[test]
    fn test_unrelated_files_rejected() {
        assert!(!is_ephemeris_file("readme.txt"));
        assert!(!is_ephemeris_file("seas_18.se1"));
        assert!(!is_ephemeris_file(""));
    }

    #[test]
    fn test_matching_is_anchored() {
        // Substring hits must not match: pattern is anchored start and end
        assert!(!is_ephemeris_file("prefix_sepl_x.se1suffix"));
        assert!(!is_ephemeris_file("xsepl_18.se1"));
        assert!(!is_ephemeris_file("sepl_18.se1.bak"));
        assert!(!is_ephemeris_file("old-seplm18.se1"));
    }
}
