//! `scraper`-backed page document implementing the [`DomQuery`] seam.

use super::DomQuery;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// A parsed HTML page. Owns the node tree; queries run against
/// [`ElementRef`]s borrowed from it.
pub struct PageDom {
    html: Html,
}

impl PageDom {
    /// Parse page HTML. `scraper` is lenient; malformed markup yields a
    /// best-effort tree rather than an error.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Root element of the page, the starting point for [`DomQuery`] calls.
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}

impl<'a> DomQuery for ElementRef<'a> {
    fn find_all(&self, selector: &str) -> Vec<Self> {
        match Selector::parse(selector) {
            Ok(sel) => self.select(&sel).collect(),
            Err(e) => {
                warn!("unparseable selector {selector:?}: {e}");
                Vec::new()
            }
        }
    }

    fn text_content(&self) -> String {
        ElementRef::text(self).collect()
    }
}
