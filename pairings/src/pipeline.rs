//! Export-to-published-page pipeline.
//!
//! read → parse → select latest round → resolve names → render → write → publish.
//! Any [`NotReady`] state of the export turns into the waiting page; only
//! unexpected I/O, an impossible round selection, or a failed publish end the
//! run with an error.

use crate::export::{NotReady, parse_export};
use crate::publish::{PublishError, Publisher};
use crate::render::{Page, StandingsRow};
use crate::tournament::{Roster, RoundError, Tournament, latest_round};
use log::{info, warn};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default export file name
pub const DEFAULT_INPUT: &str = "tournament.xml";

/// Default local output file name
pub const DEFAULT_OUTPUT: &str = "output.html";

/// Default name of the published file
pub const DEFAULT_REMOTE_NAME: &str = "index.html";

/// Run-level errors
#[derive(Debug, Error)]
pub enum PairingsError {
    #[error("Failed to read tournament export {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write page to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    MissingData(#[from] RoundError),

    #[error(transparent)]
    Publish(#[from] PublishError),
}

pub type PairingsResult<T> = Result<T, PairingsError>;

/// Paths and names for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Tournament export to read
    pub input: PathBuf,
    /// Local file the page is written to
    pub output: PathBuf,
    /// Name the page is published under
    pub remote_name: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            remote_name: DEFAULT_REMOTE_NAME.to_string(),
        }
    }
}

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// The page that was written
    pub page: Page,
    /// Whether the page was handed to a publisher successfully
    pub published: bool,
}

/// Pairings page for the latest round of `tournament`
pub fn standings_page(tournament: &Tournament) -> PairingsResult<Page> {
    let round = latest_round(&tournament.rounds)?;
    let roster = Roster::new(&tournament.players);

    let rows: Vec<StandingsRow> = round
        .matches
        .iter()
        .map(|m| {
            StandingsRow::new(
                &m.table,
                roster.name_of(m.player1.as_deref()),
                roster.name_of(m.player2.as_deref()),
            )
        })
        .collect();

    info!(
        "Round {} of \"{}\": {} pairing(s)",
        round.number,
        tournament.name,
        rows.len()
    );

    Ok(Page::Standings {
        tournament_name: tournament.name.clone(),
        rows,
    })
}

/// Decide the page for the export text `source`
pub fn page_from_source(source: &str) -> PairingsResult<Page> {
    match parse_export(source) {
        Ok(tournament) => standings_page(&tournament),
        Err(reason) => Ok(waiting(reason)),
    }
}

/// Read the export at `path` and decide the page
pub async fn load_page(path: &Path) -> PairingsResult<Page> {
    match tokio::fs::read_to_string(path).await {
        Ok(source) => page_from_source(&source),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Ok(waiting(NotReady::Missing(path.to_path_buf())))
        }
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            Ok(waiting(NotReady::NotUtf8(path.to_path_buf())))
        }
        Err(source) => Err(PairingsError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read the export, render the page and write it to the output file
pub async fn render_to_file(config: &RunConfig) -> PairingsResult<Page> {
    let page = load_page(&config.input).await?;

    tokio::fs::write(&config.output, page.render())
        .await
        .map_err(|source| PairingsError::Write {
            path: config.output.clone(),
            source,
        })?;

    info!("Wrote {} page to {}", page.kind(), config.output.display());
    Ok(page)
}

/// Full run: render to the output file, then publish it when a publisher is given
pub async fn run(
    config: &RunConfig,
    publisher: Option<&dyn Publisher>,
) -> PairingsResult<RunReport> {
    let page = render_to_file(config).await?;

    let Some(publisher) = publisher else {
        info!("Publishing disabled, leaving {}", config.output.display());
        return Ok(RunReport {
            page,
            published: false,
        });
    };

    publisher.publish(&config.output, &config.remote_name).await?;
    info!("Published {} as {}", page.kind(), config.remote_name);

    Ok(RunReport {
        page,
        published: true,
    })
}

fn waiting(reason: NotReady) -> Page {
    warn!("{reason}; using waiting page");
    Page::Waiting
}
