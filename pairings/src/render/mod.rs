//! HTML rendering of the pairings page and the waiting placeholder.
//!
//! Both documents are self-contained: inline CSS, no scripts, no external
//! assets. Rendering is pure, the same [`Page`] always produces the same bytes.

pub mod escape;
pub mod standings;
pub mod waiting;

pub use escape::escape_html;
pub use standings::{COLUMNS, StandingsRow, render_standings};
pub use waiting::{WAITING_PAGE, render_waiting};

/// A page ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Pairings of the latest round
    Standings {
        tournament_name: String,
        rows: Vec<StandingsRow>,
    },
    /// No usable tournament data yet
    Waiting,
}

impl Page {
    /// Render the complete HTML document
    pub fn render(&self) -> String {
        match self {
            Page::Standings {
                tournament_name,
                rows,
            } => render_standings(tournament_name, rows),
            Page::Waiting => render_waiting().to_string(),
        }
    }

    /// Short name used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Page::Standings { .. } => "standings",
            Page::Waiting => "waiting",
        }
    }
}
