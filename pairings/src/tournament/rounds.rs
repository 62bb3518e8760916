//! Latest-round selection.

use super::models::Round;
use thiserror::Error;

/// Round selection errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("No rounds to select from")]
    MissingData,
}

/// Pick the round with the highest number.
///
/// Rounds are compared by their numeric value. When several rounds share the
/// highest number, the one that appears first in `rounds` wins, so identical
/// input always yields the same round.
pub fn latest_round(rounds: &[Round]) -> Result<&Round, RoundError> {
    let mut sorted: Vec<&Round> = rounds.iter().collect();
    // Stable sort keeps document order among equal numbers
    sorted.sort_by(|a, b| b.number.cmp(&a.number));
    sorted.first().copied().ok_or(RoundError::MissingData)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tournament::models::Match;

    fn rounds(numbers: &[u32]) -> Vec<Round> {
        numbers.iter().map(|&n| Round::new(n, Vec::new())).collect()
    }

    #[test]
    fn test_single_round_is_selected() {
        let rounds = rounds(&[1]);
        assert_eq!(latest_round(&rounds).unwrap().number, 1);
    }

    #[test]
    fn test_highest_number_wins_regardless_of_order() {
        let rounds = rounds(&[3, 1, 7, 2]);
        assert_eq!(latest_round(&rounds).unwrap().number, 7);
    }

    #[test]
    fn test_numeric_not_lexicographic() {
        let rounds = rounds(&[9, 10]);
        assert_eq!(latest_round(&rounds).unwrap().number, 10);
    }

    #[test]
    fn test_tie_returns_first_in_input_order() {
        let rounds = vec![
            Round::new(4, vec![Match::new("1", "a", "b")]),
            Round::new(4, vec![Match::new("2", "c", "d")]),
            Round::new(2, Vec::new()),
        ];
        let picked = latest_round(&rounds).unwrap();
        assert_eq!(picked.matches[0].table, "1");
    }

    #[test]
    fn test_empty_input_is_missing_data() {
        assert_eq!(latest_round(&[]), Err(RoundError::MissingData));
    }
}
