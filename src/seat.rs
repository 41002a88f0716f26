//! Betting seats ("boxes") and split bookkeeping.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;

/// Number of betting seats at the table.
pub const SEAT_COUNT: usize = 6;

/// One betting position.
///
/// A seat persists across rounds; its bet and hands are cleared on reset.
/// After splitting it holds several hands, and `cursor` points at the one
/// currently being played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    number: u8,
    bet: u64,
    hands: Vec<Hand>,
    cursor: usize,
    active: bool,
    finished: bool,
}

impl Seat {
    /// Creates an empty seat. `number` is 1-based.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Self {
            number,
            bet: 0,
            hands: Vec::new(),
            cursor: 0,
            active: false,
            finished: false,
        }
    }

    /// Returns the 1-based seat number.
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.number
    }

    /// Returns the stake placed on this seat for the round.
    #[must_use]
    pub const fn bet(&self) -> u64 {
        self.bet
    }

    /// Returns the hands held by this seat (more than one after a split).
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the index of the hand under the cursor.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the hand under the cursor.
    #[must_use]
    pub fn current_hand(&self) -> Option<&Hand> {
        self.hands.get(self.cursor)
    }

    pub(crate) fn current_hand_mut(&mut self) -> Option<&mut Hand> {
        self.hands.get_mut(self.cursor)
    }

    pub(crate) fn hand_mut(&mut self, index: usize) -> Option<&mut Hand> {
        self.hands.get_mut(index)
    }

    /// Returns whether the seat takes part in the current round.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns whether every hand on the seat has been played out.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    pub(crate) const fn set_bet(&mut self, bet: u64) {
        self.bet = bet;
    }

    /// Opens the seat for a round with a single empty hand carrying the bet.
    pub(crate) fn activate(&mut self) {
        self.hands.clear();
        self.hands.push(Hand::new(self.bet));
        self.cursor = 0;
        self.active = true;
        self.finished = false;
    }

    pub(crate) const fn finish(&mut self) {
        self.finished = true;
    }

    /// Clears all per-round state, keeping only the seat number.
    pub(crate) fn reset(&mut self) {
        self.bet = 0;
        self.hands.clear();
        self.cursor = 0;
        self.active = false;
        self.finished = false;
    }

    /// Splits the hand under the cursor.
    ///
    /// Moves its second card into a new split-derived hand carrying the same
    /// bet, inserted right after the cursor. Both hands are marked as split.
    /// Returns the index of the new hand and the moved card.
    pub(crate) fn split_current(&mut self) -> Option<(usize, Card)> {
        let index = self.cursor;
        let hand = self.hands.get_mut(index)?;
        let moved = hand.take_split_card()?;
        hand.mark_split();
        let new_hand = Hand::from_split(moved, hand.bet());
        self.hands.insert(index + 1, new_hand);
        Some((index + 1, moved))
    }

    /// Moves the cursor to the first unfinished hand at or after `from`.
    ///
    /// Marks the seat finished and returns `false` when none remain.
    pub(crate) fn seek_open_hand(&mut self, from: usize) -> bool {
        if let Some(offset) = self
            .hands
            .iter()
            .skip(from)
            .position(|hand| !hand.is_finished())
        {
            self.cursor = from + offset;
            true
        } else {
            self.finished = true;
            false
        }
    }
}
