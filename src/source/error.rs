//! Error handling for workbook sources

use std::path::PathBuf;
use thiserror::Error;

/// The workbook resource could not be acquired.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}")]
    Http { status: u16 },

    /// The workbook file could not be read.
    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    pub fn from_response(response: &reqwest::Response) -> SourceError {
        SourceError::Http {
            status: response.status().as_u16(),
        }
    }
}

/// A resource locator string could not be understood.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocatorError {
    #[error("Resource locator is empty")]
    Empty,

    #[error("Invalid URL {locator}: {reason}")]
    InvalidUrl { locator: String, reason: String },
}
