//! Publishing the rendered page to where it is served from.
//!
//! The pipeline only depends on the [`Publisher`] trait. Destinations and
//! credentials are handed to the concrete publisher when it is built.

pub mod directory;
pub mod errors;

pub use directory::DirectoryPublisher;
pub use errors::{PublishError, PublishResult};

use async_trait::async_trait;
use std::path::Path;

/// Pushes a local file to a named destination
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish `local_file` under `remote_name`. No retries are attempted.
    async fn publish(&self, local_file: &Path, remote_name: &str) -> PublishResult<()>;
}
