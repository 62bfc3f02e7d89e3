//! Rollcall — extract structured contact records from rendered directory pages.
//!
//! A directory page renders one entry per person; each entry carries a
//! title, labeled field values (some holding `mailto:` links), and a
//! household section with shared family fields. [`extract_all`] folds an
//! already-materialized page into an ordered list of [`Record`]s, one per
//! entry, with every field best-effort and optional.
//!
//! The extractor is a pure function over a [`dom::DomQuery`] tree; it
//! never fetches, paginates, or mutates anything. Loading the page and
//! printing the results belong to the caller (see the `rollcall` binary).

pub mod cli;
pub mod dom;
pub mod error;
pub mod extract;

pub use error::Error;
pub use extract::{extract_all, extract_from_html, Record};
