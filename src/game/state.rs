//! Round state types.

use serde::{Deserialize, Serialize};

/// Round lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundState {
    /// Accepting bets for the next round.
    Betting,
    /// Offering insurance to each active seat in turn.
    Insurance,
    /// Waiting for actions on the active hand.
    Playing,
    /// Dealer draws out their hand.
    Dealer,
    /// Round is settled; waiting for the next round to be requested.
    Finished,
}

/// A player decision on the active hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw one card.
    Hit,
    /// Keep the hand as it is.
    Stand,
    /// Double the bet, draw exactly one card, then stand.
    Double,
    /// Split a pair into two hands.
    Split,
    /// Forfeit half the bet and give up the hand.
    Surrender,
}

/// Represents the current turn position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnPosition {
    /// The 1-based seat number.
    pub seat: u8,
    /// Index into the seat's hands (for splits).
    pub hand_index: usize,
}

/// A seat's answer to an insurance offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InsuranceDecision {
    /// Not offered yet, or still waiting for an answer.
    #[default]
    Undecided,
    /// Insurance bought.
    Taken,
    /// Insurance refused.
    Declined,
}

/// Insurance bookkeeping for one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InsuranceRecord {
    /// Stake paid for insurance.
    pub bet: u64,
    /// The seat's decision.
    pub decision: InsuranceDecision,
}
