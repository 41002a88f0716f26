//! Transition events emitted for presentation layers.

use core::time::Duration;

use crate::card::Card;
use crate::game::RoundState;
use crate::hand::HandStatus;
use crate::result::HandResult;

/// A discrete table transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    /// A seat's stake changed during betting.
    BetChanged {
        /// The 1-based seat number.
        seat: u8,
        /// The seat's new stake.
        bet: u64,
    },
    /// Bets were taken and the distribution is about to begin.
    RoundStarted {
        /// Total wager debited from the bankroll.
        wager: u64,
    },
    /// The shoe fell below its threshold and was rebuilt.
    ShoeReshuffled,
    /// A card was dealt face up to a seat's hand.
    CardDealt {
        /// The 1-based seat number.
        seat: u8,
        /// The hand index within the seat.
        hand: usize,
        /// The card dealt.
        card: Card,
    },
    /// A card was dealt to the dealer.
    DealerCard {
        /// The card dealt.
        card: Card,
    },
    /// Insurance is offered to a seat.
    InsuranceOffered {
        /// The 1-based seat number.
        seat: u8,
        /// The stake insurance would cost.
        cost: u64,
    },
    /// A seat answered its insurance offer.
    InsuranceDecided {
        /// The 1-based seat number.
        seat: u8,
        /// Whether insurance was taken.
        taken: bool,
        /// Stake debited (0 when declined).
        stake: u64,
    },
    /// A seat's first hand is a natural and needs no decisions.
    PlayerBlackjack {
        /// The 1-based seat number.
        seat: u8,
    },
    /// A hand becomes the globally active one.
    TurnStarted {
        /// The 1-based seat number.
        seat: u8,
        /// The hand index within the seat.
        hand: usize,
    },
    /// A hand was closed.
    HandFinished {
        /// The 1-based seat number.
        seat: u8,
        /// The hand index within the seat.
        hand: usize,
        /// Status the hand closed with.
        status: HandStatus,
    },
    /// The round moved to another state.
    StateChanged(RoundState),
    /// One hand was settled.
    HandSettled(HandResult),
    /// Insurance was resolved for a seat at settlement.
    InsuranceSettled {
        /// The 1-based seat number.
        seat: u8,
        /// Amount credited (0 when the dealer had no natural).
        payout: u64,
    },
    /// Every hand is settled.
    RoundSettled {
        /// Net result across all seats.
        net: i64,
    },
    /// The table was cleared for the next round of betting.
    RoundReset,
}

/// An event with the pause a presenter should observe before showing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacedEvent {
    /// The transition.
    pub event: TableEvent,
    /// Suggested pause before rendering it.
    pub delay: Duration,
}
