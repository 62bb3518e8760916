//! Publisher that copies the page into a local directory.

use super::{PublishError, PublishResult, Publisher};
use async_trait::async_trait;
use log::info;
use std::path::{Path, PathBuf};

/// Copies the rendered file into `dir`, for web roots on a local or mounted file system
#[derive(Debug, Clone)]
pub struct DirectoryPublisher {
    dir: PathBuf,
}

impl DirectoryPublisher {
    /// Create a publisher targeting `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl Publisher for DirectoryPublisher {
    async fn publish(&self, local_file: &Path, remote_name: &str) -> PublishResult<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| PublishError::Local {
                path: self.dir.clone(),
                source,
            })?;

        let target = self.dir.join(remote_name);
        tokio::fs::copy(local_file, &target)
            .await
            .map_err(|source| PublishError::Local {
                path: local_file.to_path_buf(),
                source,
            })?;

        info!("Copied {} to {}", local_file.display(), target.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_copies_under_remote_name() {
        let scratch = tempfile::tempdir().unwrap();
        let local = scratch.path().join("output.html");
        tokio::fs::write(&local, "<html></html>").await.unwrap();

        let publisher = DirectoryPublisher::new(scratch.path().join("www/site"));
        publisher.publish(&local, "index.html").await.unwrap();

        let copied = tokio::fs::read_to_string(publisher.dir().join("index.html"))
            .await
            .unwrap();
        assert_eq!(copied, "<html></html>");
    }

    #[tokio::test]
    async fn test_missing_local_file_is_local_error() {
        let scratch = tempfile::tempdir().unwrap();
        let publisher = DirectoryPublisher::new(scratch.path());

        let err = publisher
            .publish(&scratch.path().join("absent.html"), "index.html")
            .await
            .unwrap_err();
        assert!(matches!(err, PublishError::Local { .. }));
    }
}
