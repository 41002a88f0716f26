//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts, dealer has higher value, or dealer natural).
    Lose,
    /// Push (tie).
    Push,
    /// Player's natural wins 3:2.
    Blackjack,
    /// Player surrendered.
    Surrendered,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The 1-based seat number.
    pub seat: u8,
    /// The hand index within the seat (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet amount for this hand (doubled if the hand was doubled).
    pub bet: u64,
    /// Amount credited to the bankroll at settlement (stake plus winnings).
    pub payout: u64,
    /// Net result of the hand.
    pub net: i64,
    /// Whether the hand busted.
    pub busted: bool,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
}

/// Result for a single seat after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatResult {
    /// The 1-based seat number.
    pub seat: u8,
    /// Results for each hand (multiple if split).
    pub hands: Vec<HandResult>,
    /// Total credited to the bankroll for this seat, insurance included.
    pub total_payout: u64,
    /// Net result of the seat, insurance included.
    pub net: i64,
    /// Insurance stake (0 if declined or not offered).
    pub insurance_bet: u64,
    /// Insurance payout (0 unless the dealer had a natural).
    pub insurance_payout: u64,
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each active seat in ascending order.
    pub seats: Vec<SeatResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had a natural.
    pub dealer_blackjack: bool,
    /// Net result of the round across all seats.
    pub net: i64,
}
