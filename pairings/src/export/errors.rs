//! Reasons an export cannot be turned into a pairings page yet.

use std::path::PathBuf;
use thiserror::Error;

/// Exports shorter than this (after trimming) are treated as not written yet
pub const MIN_SOURCE_LEN: usize = 10;

/// The export holds no usable tournament data yet.
///
/// Every variant degrades to the waiting page instead of failing the run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotReady {
    /// Export file does not exist
    #[error("Tournament export {0} does not exist yet")]
    Missing(PathBuf),

    /// Export file is not UTF-8 text
    #[error("Tournament export {0} is not valid UTF-8")]
    NotUtf8(PathBuf),

    /// Export is empty or too short to hold a tournament
    #[error("Tournament export holds {len} characters, expected at least {MIN_SOURCE_LEN}")]
    TooShort { len: usize },

    /// Export is not well-formed XML
    #[error("Tournament export is not well-formed XML: {0}")]
    Malformed(String),

    /// Document root is something other than `tournament`
    #[error("Expected <tournament> root element, found <{0}>")]
    UnexpectedRoot(String),

    /// No player could be read from `players/player`
    #[error("Tournament export has no players")]
    NoPlayers,

    /// No round could be read from `pods/pod/rounds/round`
    #[error("Tournament export has no rounds")]
    NoRounds,
}

impl NotReady {
    /// Whether the file itself is missing or empty, as opposed to present but incomplete
    pub fn is_source_unavailable(&self) -> bool {
        matches!(
            self,
            NotReady::Missing(_) | NotReady::NotUtf8(_) | NotReady::TooShort { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short_message_mentions_threshold() {
        let msg = NotReady::TooShort { len: 3 }.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains("10"));
    }

    #[test]
    fn test_source_unavailable_classification() {
        assert!(NotReady::Missing(PathBuf::from("t.xml")).is_source_unavailable());
        assert!(NotReady::TooShort { len: 0 }.is_source_unavailable());
        assert!(!NotReady::NoPlayers.is_source_unavailable());
        assert!(!NotReady::Malformed("eof".to_string()).is_source_unavailable());
    }
}
