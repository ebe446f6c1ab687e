//! Filesystem-backed workbook source

use super::WorkbookSource;
use super::error::SourceError;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl WorkbookSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, SourceError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn reads_file_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.xlsx");
        std::fs::write(&path, b"bytes").unwrap();

        let source = FileSource::new(&path);
        assert_eq!(source.fetch().await.unwrap(), b"bytes".to_vec());
    }

    #[tokio::test]
    async fn missing_file_is_unavailable() {
        let dir = tempdir().unwrap();
        let source = FileSource::new(dir.path().join("missing.xlsx"));

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        assert!(err.to_string().contains("missing.xlsx"));
    }
}
