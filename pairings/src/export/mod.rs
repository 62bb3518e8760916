//! Reading the tournament-management tool's XML export.
//!
//! The export is rewritten by the tool while a tournament runs, so an empty,
//! truncated or half-populated file is an expected state rather than an error.
//! [`parse_export`] reports those states as [`NotReady`].

pub mod errors;
pub mod xml;

pub use errors::{MIN_SOURCE_LEN, NotReady};
pub use xml::{ROOT_ELEMENT, parse_export, trim_source};
