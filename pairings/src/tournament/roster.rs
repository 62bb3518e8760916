//! Player identifier to display name lookup.

use super::models::Player;
use std::collections::HashMap;

/// Shown in place of a player the roster does not know
pub const UNKNOWN_PLAYER: &str = "???";

/// Display names keyed by player id
#[derive(Debug, Clone, Default)]
pub struct Roster {
    names: HashMap<String, String>,
}

impl Roster {
    /// Build the lookup from the registered players.
    ///
    /// A repeated id keeps the last player's name.
    pub fn new(players: &[Player]) -> Self {
        let names = players
            .iter()
            .map(|p| (p.id.clone(), p.display_name()))
            .collect();
        Self { names }
    }

    /// Display name for `id`, or [`UNKNOWN_PLAYER`] when the id is absent or unknown
    pub fn name_of(&self, id: Option<&str>) -> &str {
        id.and_then(|id| self.names.get(id))
            .map(String::as_str)
            .unwrap_or(UNKNOWN_PLAYER)
    }

    /// Number of distinct ids
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the roster has no players
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
