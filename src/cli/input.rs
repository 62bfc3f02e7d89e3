//! Loading page HTML handed to the extractor.
//!
//! The binary never fetches anything: it consumes a page that some
//! renderer already materialized, read from a file or piped on stdin.

use crate::error::Error;
use std::io::Read;
use std::path::PathBuf;

/// Where the page HTML comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    /// Read from a saved file.
    File(PathBuf),
    /// Read from stdin (the `-` argument).
    Stdin,
}

impl PageSource {
    /// Interpret a CLI argument: `-` means stdin, anything else a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Read the page HTML.
    pub fn read(&self) -> Result<String, Error> {
        match self {
            Self::File(path) => std::fs::read_to_string(path).map_err(|source| Error::ReadPage {
                path: path.clone(),
                source,
            }),
            Self::Stdin => {
                let mut html = String::new();
                std::io::stdin().read_to_string(&mut html)?;
                Ok(html)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_dash_means_stdin() {
        assert_eq!(PageSource::from_arg("-"), PageSource::Stdin);
        assert_eq!(
            PageSource::from_arg("page.html"),
            PageSource::File(PathBuf::from("page.html"))
        );
    }

    #[test]
    fn test_read_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<html><body></body></html>").unwrap();

        let source = PageSource::File(file.path().to_path_buf());
        let html = source.read().unwrap();
        assert!(html.contains("<body>"));
    }

    #[test]
    fn test_read_missing_file_reports_path() {
        let source = PageSource::from_arg("/does/not/exist.html");
        let err = source.read().unwrap_err();
        assert!(err.to_string().contains("/does/not/exist.html"));
    }
}
