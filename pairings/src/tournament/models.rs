//! Tournament data models rebuilt from the export on every run.

/// Player identifier as written in the export's `userid` attributes
pub type PlayerId = String;

/// Round number (compared numerically, never as text)
pub type RoundNumber = u32;

/// A tournament reduced to what the pairings page needs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tournament {
    /// Tournament name shown in the page header
    pub name: String,
    /// Registered players
    pub players: Vec<Player>,
    /// Rounds from every pod, in document order
    pub rounds: Vec<Round>,
}

/// Registered player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Unique identifier within the tournament
    pub id: PlayerId,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
}

impl Player {
    /// Create a new player
    pub fn new(id: impl Into<PlayerId>, first_name: &str, last_name: &str) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    /// Name as printed on the pairings page
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One numbered stage of the tournament
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Round number
    pub number: RoundNumber,
    /// Pairings in document order
    pub matches: Vec<Match>,
}

impl Round {
    /// Create a new round
    pub fn new(number: RoundNumber, matches: Vec<Match>) -> Self {
        Self { number, matches }
    }
}

/// A single pairing at a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Table label (usually a number, kept verbatim)
    pub table: String,
    /// First seat, `None` when the export leaves it out
    pub player1: Option<PlayerId>,
    /// Second seat, `None` for a bye or a half-written export
    pub player2: Option<PlayerId>,
}

impl Match {
    /// Create a pairing between two known seats
    pub fn new(table: &str, player1: &str, player2: &str) -> Self {
        Self {
            table: table.to_string(),
            player1: Some(player1.to_string()),
            player2: Some(player2.to_string()),
        }
    }
}
