//! Error types for table operations.
//!
//! Every error is recoverable and leaves the table untouched. Each variant
//! maps onto one of three broad kinds via `kind()`.

use thiserror::Error;

/// Broad classification shared by all operation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The operation is not legal in the current round state.
    InvalidState,
    /// The operation breaks an eligibility rule.
    IllegalAction,
    /// The bankroll cannot cover the operation.
    InsufficientFunds,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Seat number outside 1..=6.
    #[error("seat not found")]
    SeatNotFound,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// No bets were placed in the previous round.
    #[error("no previous bets to repeat")]
    NoPreviousBets,
}

impl BetError {
    /// Returns the broad classification of this error.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::InvalidState => ErrorKind::InvalidState,
            Self::InsufficientFunds => ErrorKind::InsufficientFunds,
            Self::SeatNotFound | Self::ZeroBet | Self::NoPreviousBets => ErrorKind::IllegalAction,
        }
    }
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No seats have placed bets.
    #[error("no seats have placed bets")]
    NoBets,
    /// Total wager exceeds the bankroll.
    #[error("total wager exceeds bankroll")]
    InsufficientFunds,
}

impl DealError {
    /// Returns the broad classification of this error.
    ///
    /// An empty or uncovered table cannot leave the betting state, so both
    /// count as state errors.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::InvalidState | Self::NoBets | Self::InsufficientFunds => ErrorKind::InvalidState,
        }
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this seat's turn.
    #[error("not this seat's turn")]
    NotYourTurn,
    /// Seat number outside 1..=6.
    #[error("seat not found")]
    SeatNotFound,
    /// Hand is already finished.
    #[error("hand is already finished")]
    HandFinished,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Seat already holds the maximum number of hands.
    #[error("maximum hands per seat reached")]
    MaxHandsReached,
    /// Cannot surrender at this point.
    #[error("cannot surrender at this point")]
    CannotSurrender,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
}

impl ActionError {
    /// Returns the broad classification of this error.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::InvalidState => ErrorKind::InvalidState,
            Self::InsufficientFunds => ErrorKind::InsufficientFunds,
            Self::NotYourTurn
            | Self::SeatNotFound
            | Self::HandFinished
            | Self::CannotDouble
            | Self::CannotSplit
            | Self::MaxHandsReached
            | Self::CannotSurrender => ErrorKind::IllegalAction,
        }
    }
}

/// Errors that can occur during insurance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// Invalid game state for insurance.
    #[error("invalid game state for insurance")]
    InvalidState,
    /// Seat number outside 1..=6.
    #[error("seat not found")]
    SeatNotFound,
    /// Insurance is currently offered to another seat.
    #[error("insurance is not offered to this seat")]
    NotOffered,
    /// Insufficient funds for insurance.
    #[error("insufficient funds for insurance")]
    InsufficientFunds,
}

impl InsuranceError {
    /// Returns the broad classification of this error.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::InvalidState => ErrorKind::InvalidState,
            Self::InsufficientFunds => ErrorKind::InsufficientFunds,
            Self::SeatNotFound | Self::NotOffered => ErrorKind::IllegalAction,
        }
    }
}

/// Errors that can occur when moving between rounds or maintaining the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid game state for this operation.
    #[error("invalid game state for this operation")]
    InvalidState,
}

impl RoundError {
    /// Returns the broad classification of this error.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::InvalidState => ErrorKind::InvalidState,
        }
    }
}
