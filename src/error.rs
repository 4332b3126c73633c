//! Error types for card and pile operations.

use thiserror::Error;

/// Errors that can occur while parsing ranks, suits, or card text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text matched no rank alias.
    #[error("unrecognized rank: {0:?}")]
    UnknownRank(String),
    /// The text matched no suit alias.
    #[error("unrecognized suit: {0:?}")]
    UnknownSuit(String),
    /// Card text was not in the form `<rank> of <suit>`.
    #[error("card text must be in the form \"<rank> of <suit>\": {0:?}")]
    MalformedCard(String),
}

/// Errors that can occur when taking cards out of a pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// The pile has no cards to give.
    #[error("pile is empty")]
    Empty,
    /// The requested card is not in this pile.
    #[error("card is not in this pile")]
    CardNotFound,
    /// The pile holds fewer cards than requested.
    #[error("pile holds {have} cards, wanted {want}")]
    NotEnoughCards {
        /// Number of cards requested.
        want: usize,
        /// Number of cards actually in the pile.
        have: usize,
    },
}

/// Errors that can occur when filling a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FillError {
    /// Only an empty deck can be filled.
    #[error("deck already holds {0} cards")]
    NotEmpty(usize),
}

/// Errors that can occur when dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Dealing requires at least one target pile.
    #[error("deal requires at least one target pile")]
    NoPiles,
}
