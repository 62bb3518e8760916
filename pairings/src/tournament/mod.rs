//! Tournament model, latest-round selection and player name lookup.
//!
//! ## Example
//!
//! ```
//! use pairings::tournament::{latest_round, Match, Player, Roster, Round};
//!
//! let players = vec![Player::new("1", "Anna", "Kowalska"), Player::new("2", "Jan", "Nowak")];
//! let rounds = vec![
//!     Round::new(1, vec![Match::new("3", "2", "1")]),
//!     Round::new(2, vec![Match::new("5", "1", "2")]),
//! ];
//!
//! let roster = Roster::new(&players);
//! let round = latest_round(&rounds).unwrap();
//! assert_eq!(round.number, 2);
//! assert_eq!(roster.name_of(round.matches[0].player1.as_deref()), "Anna Kowalska");
//! ```

pub mod models;
pub mod roster;
pub mod rounds;

pub use models::{Match, Player, PlayerId, Round, RoundNumber, Tournament};
pub use roster::{Roster, UNKNOWN_PLAYER};
pub use rounds::{RoundError, latest_round};
