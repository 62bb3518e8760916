//! FTP upload of the rendered page.

use crate::config::FtpConfig;
use async_trait::async_trait;
use log::{debug, info};
use pairings::publish::{PublishError, PublishResult, Publisher};
use std::fs::File;
use std::path::Path;
use suppaftp::types::FileType;
use suppaftp::{FtpError, FtpStream};

/// Uploads the page with a fresh FTP session per publish
#[derive(Debug, Clone)]
pub struct FtpPublisher {
    config: FtpConfig,
}

impl FtpPublisher {
    /// Create a publisher for the given server
    pub fn new(config: FtpConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Publisher for FtpPublisher {
    async fn publish(&self, local_file: &Path, remote_name: &str) -> PublishResult<()> {
        let config = self.config.clone();
        let local_file = local_file.to_path_buf();
        let remote_name = remote_name.to_string();

        // suppaftp's client is blocking
        tokio::task::spawn_blocking(move || upload(&config, &local_file, &remote_name))
            .await
            .map_err(|e| PublishError::Task(e.to_string()))?
    }
}

/// Connect, log in, change into the destination directory and store the file
fn upload(config: &FtpConfig, local_file: &Path, remote_name: &str) -> PublishResult<()> {
    let destination = config.describe(remote_name);
    let transfer = |e: FtpError| PublishError::Transfer {
        destination: destination.clone(),
        reason: e.to_string(),
    };

    let mut file = File::open(local_file).map_err(|source| PublishError::Local {
        path: local_file.to_path_buf(),
        source,
    })?;

    debug!("Connecting to {}:{}", config.host, config.port);
    let mut stream = FtpStream::connect((config.host.as_str(), config.port)).map_err(transfer)?;
    stream
        .login(config.user.as_str(), config.password.as_str())
        .map_err(transfer)?;

    if !config.dest_dir.is_empty() {
        stream.cwd(config.dest_dir.as_str()).map_err(transfer)?;
    }
    stream.transfer_type(FileType::Binary).map_err(transfer)?;

    let bytes = stream.put_file(remote_name, &mut file).map_err(transfer)?;
    // The file is stored once put_file returns; QUIT failures are only logged
    if let Err(e) = stream.quit() {
        debug!("QUIT after upload failed: {e}");
    }

    info!("Uploaded {bytes} bytes to {destination}");
    Ok(())
}
