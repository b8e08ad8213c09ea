//! Core library modules for ephe-dl
//!
//! This module contains the internal implementation details of the ephe-dl library.

pub mod error;
pub mod fetch;
pub mod listing;
pub mod mirror;
pub mod pattern;
pub mod source;

// Re-export main types for internal use
pub use mirror::{Mirror, MirrorOptions, MirrorReport};
pub use source::SourceConfig;
