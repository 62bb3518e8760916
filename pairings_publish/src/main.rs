//! Tournament pairings publisher.
//!
//! Reads the tournament-management tool's XML export, renders the latest
//! round's pairings (or a waiting page) and uploads the result over FTP.

mod config;
mod ftp;

use anyhow::{Error, bail};
use config::{CliArgs, PublishConfig, PublishTarget};
use ftp::FtpPublisher;
use log::{error, info};
use pairings::{DirectoryPublisher, Publisher};
use pico_args::Arguments;

const HELP: &str = "\
Publish the current round's pairings as a static HTML page

USAGE:
  pairings_publish [OPTIONS]

OPTIONS:
  --input        PATH      Tournament export       [default: env PAIRINGS_INPUT or tournament.xml]
  --output       PATH      Rendered page           [default: env PAIRINGS_OUTPUT or output.html]
  --remote-name  NAME      Published file name     [default: env PAIRINGS_REMOTE_NAME or index.html]
  --publish-dir  DIR       Copy into DIR instead of uploading over FTP

FLAGS:
  --no-publish             Only write the rendered page
  -h, --help               Print help information

ENVIRONMENT:
  FTP_HOST                 FTP server host
  FTP_PORT                 FTP server port [default: 21]
  FTP_USER                 FTP login
  FTP_PASS                 FTP password
  FTP_DEST                 Remote directory to upload into
  RUST_LOG                 Log filter [default: info]
  (A .env file in the working directory is read first)
";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    if let Err(e) = try_main(pargs).await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

async fn try_main(mut pargs: Arguments) -> Result<(), Error> {
    let args = CliArgs {
        no_publish: pargs.contains("--no-publish"),
        input: pargs.opt_value_from_str("--input")?,
        output: pargs.opt_value_from_str("--output")?,
        remote_name: pargs.opt_value_from_str("--remote-name")?,
        publish_dir: pargs.opt_value_from_str("--publish-dir")?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        bail!("Unexpected arguments: {remaining:?}");
    }

    let config = PublishConfig::from_env(args)?;
    config.validate()?;

    info!(
        "Publishing pairings from {} via {}",
        config.run.input.display(),
        describe_target(&config)
    );

    let publisher: Option<Box<dyn Publisher>> = match &config.target {
        PublishTarget::Ftp(ftp) => Some(Box::new(FtpPublisher::new(ftp.clone()))),
        PublishTarget::Directory(dir) => Some(Box::new(DirectoryPublisher::new(dir))),
        PublishTarget::Disabled => None,
    };

    let report = pairings::run(&config.run, publisher.as_deref()).await?;
    info!(
        "Done: {} page{}",
        report.page.kind(),
        if report.published { " published" } else { " written" }
    );

    Ok(())
}

fn describe_target(config: &PublishConfig) -> String {
    match &config.target {
        PublishTarget::Ftp(ftp) => format!("ftp://{}", ftp.describe(&config.run.remote_name)),
        PublishTarget::Directory(dir) => dir.join(&config.run.remote_name).display().to_string(),
        PublishTarget::Disabled => "nothing (--no-publish)".to_string(),
    }
}
