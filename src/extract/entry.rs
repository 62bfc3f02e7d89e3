//! Per-entry field extraction.
//!
//! Each of the four sub-extractions is independent and best-effort: a
//! missing sub-node omits that field and never fails the record. A
//! missing household section cascades to omit only the fields scoped to
//! it (parent email and state).

use super::selectors;
use super::Record;
use crate::dom::DomQuery;
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// Build one [`Record`] from one directory entry node.
pub(crate) fn extract_entry<N: DomQuery>(entry: &N) -> Record {
    let mut record = Record::default();

    if let Some(title) = entry.find_first(selectors::ENTRY_TITLE) {
        record.name = Some(title.text_content().trim().to_string());
    }

    if let Some(link) = entry.find_first(selectors::MAILTO_VALUE) {
        record.email = Some(mailto_text(&link));
    }

    if let Some(link) = entry.find_first(selectors::HOUSEHOLD_MAILTO_VALUE) {
        record.parent_email = Some(mailto_text(&link));
    }

    if let Some(address) = entry.find_first(selectors::HOUSEHOLD_FIELD_TITLE) {
        record.state = state_from_address(&address.text_content());
    }

    record
}

/// Trimmed text of a mailto link, with a diagnostic when the visible
/// text is not itself an address (it stays in the record regardless).
fn mailto_text<N: DomQuery>(link: &N) -> String {
    let text = link.text_content().trim().to_string();
    if !text.is_empty() && !EMAIL_RE.is_match(&text) {
        warn!("mailto link text does not look like an email address: {text:?}");
    }
    text
}

/// Parse a state out of an address line like
/// `"123 Main St, Springfield, IL, 62704"`: split the trimmed text on
/// commas and take the second-to-last part, trimmed. One part or none
/// yields nothing.
///
/// The second-to-last heuristic assumes a Street, City, State, Zip
/// layout and is kept literally as the page contract.
pub(crate) fn state_from_address(text: &str) -> Option<String> {
    let parts: Vec<&str> = text.trim().split(',').collect();
    if parts.len() > 1 {
        Some(parts[parts.len() - 2].trim().to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_four_part_address() {
        assert_eq!(
            state_from_address("123 Main St, Springfield, IL, 62704").as_deref(),
            Some("IL")
        );
    }

    #[test]
    fn test_state_omitted_without_comma() {
        assert_eq!(state_from_address("Springfield"), None);
        assert_eq!(state_from_address(""), None);
    }

    #[test]
    fn test_state_from_two_part_text_takes_first_segment() {
        // Three parts would put the state second-to-last; with only two,
        // the heuristic lands on the first segment. Kept as-is.
        assert_eq!(
            state_from_address("Springfield, IL").as_deref(),
            Some("Springfield")
        );
    }

    #[test]
    fn test_state_with_trailing_comma() {
        assert_eq!(state_from_address("Springfield,").as_deref(), Some("Springfield"));
    }

    #[test]
    fn test_state_trims_whitespace() {
        assert_eq!(
            state_from_address("  1 Elm Rd ,  Shelbyville ,  IN , 46176  ").as_deref(),
            Some("IN")
        );
    }
}
