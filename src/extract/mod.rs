//! Directory page extraction.
//!
//! A single synchronous pass over the entry nodes of an
//! already-materialized page: one [`Record`] per entry, in document
//! order, every field best-effort. The pass reads the tree and nothing
//! else; it cannot fail, only omit.

mod entry;
pub mod record;
pub mod selectors;

pub use record::Record;

use crate::dom::{DomQuery, PageDom};
use tracing::info;

/// Extract one [`Record`] per directory entry found under `root`, in
/// document order. A root with no entries yields an empty list.
pub fn extract_all<N: DomQuery>(root: &N) -> Vec<Record> {
    let entries = root.find_all(selectors::ENTRY);
    info!("found {} directory entries", entries.len());
    entries.iter().map(entry::extract_entry).collect()
}

/// Parse `html` and run [`extract_all`] over the resulting page.
pub fn extract_from_html(html: &str) -> Vec<Record> {
    let page = PageDom::parse(html);
    extract_all(&page.root())
}
