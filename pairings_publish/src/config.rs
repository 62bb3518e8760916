//! Publisher configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use pairings::RunConfig;
use std::fmt;
use std::path::PathBuf;

/// Default FTP control port
pub const DEFAULT_FTP_PORT: u16 = 21;

/// Values given on the command line; each one overrides its environment variable
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub remote_name: Option<String>,
    pub publish_dir: Option<PathBuf>,
    pub no_publish: bool,
}

/// Complete configuration for one run
#[derive(Debug, Clone)]
pub struct PublishConfig {
    /// Input, output and remote file names
    pub run: RunConfig,
    /// Where the page goes after it is written
    pub target: PublishTarget,
}

/// Destination of the rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishTarget {
    /// Upload over FTP
    Ftp(FtpConfig),
    /// Copy into a local directory
    Directory(PathBuf),
    /// Only write the local file
    Disabled,
}

/// FTP connection settings
#[derive(Clone, PartialEq, Eq)]
pub struct FtpConfig {
    /// Server host name or address
    pub host: String,
    /// Control port
    pub port: u16,
    /// Login name
    pub user: String,
    /// Login password
    pub password: String,
    /// Remote directory to upload into; empty means the login directory
    pub dest_dir: String,
}

impl fmt::Debug for FtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("dest_dir", &self.dest_dir)
            .finish()
    }
}

impl PublishConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `args` - Command-line overrides
    ///
    /// # Errors
    ///
    /// Returns error if FTP publishing is selected and a required variable is
    /// missing, or if a variable is invalid
    pub fn from_env(args: CliArgs) -> Result<Self, ConfigError> {
        Self::from_lookup(args, |key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` to read variables
    pub fn from_lookup<F>(args: CliArgs, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = RunConfig::default();
        let run = RunConfig {
            input: args
                .input
                .or_else(|| lookup("PAIRINGS_INPUT").map(PathBuf::from))
                .unwrap_or(defaults.input),
            output: args
                .output
                .or_else(|| lookup("PAIRINGS_OUTPUT").map(PathBuf::from))
                .unwrap_or(defaults.output),
            remote_name: args
                .remote_name
                .or_else(|| lookup("PAIRINGS_REMOTE_NAME"))
                .unwrap_or(defaults.remote_name),
        };

        let target = if args.no_publish {
            PublishTarget::Disabled
        } else if let Some(dir) = args.publish_dir {
            PublishTarget::Directory(dir)
        } else {
            PublishTarget::Ftp(FtpConfig::from_lookup(&lookup)?)
        };

        Ok(PublishConfig { run, target })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        let remote_name = &self.run.remote_name;
        if remote_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                var: "PAIRINGS_REMOTE_NAME".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        if remote_name.contains(['/', '\\']) {
            return Err(ConfigError::Invalid {
                var: "PAIRINGS_REMOTE_NAME".to_string(),
                reason: "Must be a file name; set the directory with FTP_DEST".to_string(),
            });
        }

        if let PublishTarget::Ftp(ftp) = &self.target {
            if ftp.port == 0 {
                return Err(ConfigError::Invalid {
                    var: "FTP_PORT".to_string(),
                    reason: "Must be greater than 0".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl FtpConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str, hint: &str| {
            lookup(var)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ConfigError::MissingRequired {
                    var: var.to_string(),
                    hint: hint.to_string(),
                })
        };

        let host = required("FTP_HOST", "Set it in .env or pass --no-publish")?;
        let user = required("FTP_USER", "Set it in .env or pass --no-publish")?;
        let password = required("FTP_PASS", "Set it in .env or pass --no-publish")?;

        let port = match lookup("FTP_PORT") {
            Some(v) => v.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: "FTP_PORT".to_string(),
                reason: format!("Not a port number: {v}"),
            })?,
            None => DEFAULT_FTP_PORT,
        };

        Ok(FtpConfig {
            host,
            port,
            user,
            password,
            dest_dir: lookup("FTP_DEST").unwrap_or_default(),
        })
    }

    /// `host:port/dir/name` for log lines and errors
    pub fn describe(&self, remote_name: &str) -> String {
        let dir = self.dest_dir.trim_end_matches('/');
        if dir.is_empty() {
            format!("{}:{}/{}", self.host, self.port, remote_name)
        } else {
            format!("{}:{}/{}/{}", self.host, self.port, dir.trim_start_matches('/'), remote_name)
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {var}\nHint: {hint}")]
    MissingRequired { var: String, hint: String },

    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}
