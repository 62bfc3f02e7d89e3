//! Tree query seam between the extractor and the page backend.
//!
//! The extractor only ever needs two primitives from the page: "find all
//! descendants matching a selector" and "find the first descendant
//! matching a selector within this subtree", plus the concatenated text
//! of a node. [`DomQuery`] captures exactly that, so the production
//! `scraper` backend and test fixtures satisfy the same contract.

pub mod page;

pub use page::PageDom;

/// Read-only query access to one node of a tree-structured document.
///
/// Selector strings use CSS syntax. A selector that fails to parse, or
/// matches nothing, yields no nodes; neither case is an error.
pub trait DomQuery: Sized {
    /// All descendants matching `selector`, in document order.
    fn find_all(&self, selector: &str) -> Vec<Self>;

    /// First descendant matching `selector`, if any.
    fn find_first(&self, selector: &str) -> Option<Self> {
        self.find_all(selector).into_iter().next()
    }

    /// Concatenated text of this node and its descendants.
    fn text_content(&self) -> String;
}
