//! Error types for the rollcall input boundary.
//!
//! Absent DOM nodes are not errors anywhere in this crate: a query that
//! finds nothing simply omits the corresponding record field. The only
//! failures worth a type are the ones at the input boundary, where the
//! caller hands us page HTML to begin with.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The page file could not be read.
    #[error("failed to read page {path}: {source}")]
    ReadPage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Page HTML could not be read from stdin.
    #[error("failed to read page from stdin: {0}")]
    ReadStdin(#[from] std::io::Error),
}
