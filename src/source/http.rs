//! HTTP-backed workbook source

use super::WorkbookSource;
use super::error::SourceError;
use reqwest::{Client, Url};

/// Fetches the workbook with a plain GET. No timeout is configured, so a
/// stalled transfer waits on the OS-level network timeouts.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait::async_trait]
impl WorkbookSource for HttpSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, SourceError> {
        let response = self.client.get(self.url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::from_response(&response));
        }
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
