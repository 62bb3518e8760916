//! # Pairings
//!
//! Turns a tournament-management tool's XML export into a static HTML page
//! listing the pairings of the latest round, and hands it to a publisher.
//!
//! ## Pipeline
//!
//! - **Export**: tolerant XML parsing; repeated elements always become lists
//! - **Round selection**: the highest-numbered round, compared numerically
//! - **Roster**: player id to display name, `???` for unknown ids
//! - **Render**: the pairings table or a constant waiting page
//! - **Publish**: push the written file to its destination
//!
//! An export that is missing, empty, malformed or incomplete never fails the
//! run; it produces the waiting page instead.
//!
//! ## Core Modules
//!
//! - [`export`]: XML shape and normalization
//! - [`tournament`]: domain model, round selection, name lookup
//! - [`render`]: HTML documents
//! - [`publish`]: the [`Publisher`] seam
//! - [`pipeline`]: orchestration
//!
//! ## Example
//!
//! ```
//! use pairings::{Page, page_from_source};
//!
//! // Exports that are still being written degrade to the waiting page
//! assert_eq!(page_from_source("").unwrap(), Page::Waiting);
//! ```

/// XML export parsing and normalization.
pub mod export;
pub use export::{NotReady, parse_export};

/// Orchestration of a single run.
pub mod pipeline;
pub use pipeline::{
    PairingsError, PairingsResult, RunConfig, RunReport, load_page, page_from_source,
    render_to_file, run, standings_page,
};

/// Publishing the rendered page.
pub mod publish;
pub use publish::{DirectoryPublisher, PublishError, Publisher};

/// HTML rendering.
pub mod render;
pub use render::{Page, StandingsRow, render_standings, render_waiting};

/// Tournament model, round selection and name lookup.
pub mod tournament;
