//! Workbook sources
//!
//! A source turns a resource locator into the raw bytes of a workbook.

use crate::source::error::{LocatorError, SourceError};
use reqwest::Url;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

pub mod error;
pub(crate) mod file;
pub(crate) mod http;

pub use file::FileSource;
pub use http::HttpSource;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait WorkbookSource: Send + Sync {
    /// Human readable location, used in logs.
    fn describe(&self) -> String;

    /// Acquire the full workbook payload.
    async fn fetch(&self) -> Result<Vec<u8>, SourceError>;
}

/// Where the workbook lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLocator {
    /// A file on the local filesystem.
    Path(PathBuf),
    /// An `http://` or `https://` URL.
    Url(Url),
}

impl ResourceLocator {
    /// Build the source that serves this locator.
    pub fn source(&self) -> Arc<dyn WorkbookSource> {
        match self {
            ResourceLocator::Path(path) => Arc::new(FileSource::new(path.clone())),
            ResourceLocator::Url(url) => Arc::new(HttpSource::new(url.clone())),
        }
    }
}

impl FromStr for ResourceLocator {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(LocatorError::Empty);
        }

        let invalid = |reason: String| LocatorError::InvalidUrl {
            locator: trimmed.to_string(),
            reason,
        };

        let lower = trimmed.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
            Ok(ResourceLocator::Url(url))
        } else if lower.starts_with("file://") {
            let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
            let path = url
                .to_file_path()
                .map_err(|_| invalid("not a local file path".to_string()))?;
            Ok(ResourceLocator::Path(path))
        } else {
            Ok(ResourceLocator::Path(PathBuf::from(trimmed)))
        }
    }
}

impl Display for ResourceLocator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceLocator::Path(path) => write!(f, "{}", path.display()),
            ResourceLocator::Url(url) => write!(f, "{}", url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_http_urls() {
        let locator: ResourceLocator = "https://example.org/data/data.xlsx".parse().unwrap();
        assert_eq!(
            locator,
            ResourceLocator::Url(Url::parse("https://example.org/data/data.xlsx").unwrap())
        );
    }

    #[test]
    fn parses_plain_paths() {
        let locator: ResourceLocator = "data/data.xlsx".parse().unwrap();
        assert_eq!(locator, ResourceLocator::Path(PathBuf::from("data/data.xlsx")));
        assert_eq!(locator.to_string(), "data/data.xlsx");
    }

    #[cfg(unix)]
    #[test]
    fn parses_file_urls_into_paths() {
        let locator: ResourceLocator = "file:///tmp/data.xlsx".parse().unwrap();
        assert_eq!(locator, ResourceLocator::Path(PathBuf::from("/tmp/data.xlsx")));
    }

    #[test]
    fn rejects_empty_locator() {
        assert_eq!("   ".parse::<ResourceLocator>(), Err(LocatorError::Empty));
    }

    #[test]
    fn rejects_malformed_url() {
        let err = "http://".parse::<ResourceLocator>().unwrap_err();
        assert!(matches!(err, LocatorError::InvalidUrl { .. }));
    }
}
