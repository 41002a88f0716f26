//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Hard total (aces as 1) and the number of aces among `cards`.
fn hard_total(cards: &[Card]) -> (u16, u8) {
    cards.iter().fold((0u16, 0u8), |(total, aces), card| {
        (total + u16::from(card.value()), aces + u8::from(card.is_ace()))
    })
}

/// Evaluates `cards` plus `extra` non-ace points.
///
/// Every ace starts at 11 and is demoted to 1, one at a time, while the total
/// exceeds 21. Returns the resolved value and whether an ace still counts 11.
pub(crate) fn evaluate_cards(cards: &[Card], extra: u8) -> (u8, bool) {
    let (hard, aces) = hard_total(cards);
    let mut value = hard + u16::from(extra) + 10 * u16::from(aces);
    let mut high_aces = aces;
    while value > 21 && high_aces > 0 {
        value -= 10;
        high_aces -= 1;
    }

    (value.min(u16::from(u8::MAX)) as u8, high_aces > 0)
}

/// Hand status, derived from the hand's flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is active and can take actions.
    Active,
    /// Player has stood (or the hand was closed after a double or ace split).
    Stand,
    /// Hand has busted (over 21).
    Bust,
    /// Hand is a blackjack (natural 21).
    Blackjack,
    /// Player has surrendered.
    Surrendered,
}

/// A player's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    bet: u64,
    finished: bool,
    from_split: bool,
    doubled: bool,
    surrendered: bool,
    can_double: bool,
    can_split: bool,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: u64) -> Self {
        Self {
            cards: Vec::new(),
            bet,
            finished: false,
            from_split: false,
            doubled: false,
            surrendered: false,
            can_double: false,
            can_split: false,
        }
    }

    /// Creates a new hand from a split, holding the card moved off the pair.
    #[must_use]
    pub fn from_split(card: Card, bet: u64) -> Self {
        let mut hand = Self::new(bet);
        hand.from_split = true;
        hand.add_card(card);
        hand
    }

    /// Adds a card to the hand and refreshes the double/split flags.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.refresh_flags();
    }

    fn refresh_flags(&mut self) {
        self.can_double = self.cards.len() == 2 && !self.finished;
        self.can_split = match self.cards.as_slice() {
            [first, second] => first.value() == second.value(),
            _ => false,
        };
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub fn status(&self) -> HandStatus {
        if self.surrendered {
            HandStatus::Surrendered
        } else if self.is_busted() {
            HandStatus::Bust
        } else if self.is_blackjack() {
            HandStatus::Blackjack
        } else if self.finished {
            HandStatus::Stand
        } else {
            HandStatus::Active
        }
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> u64 {
        self.bet
    }

    /// Returns whether the hand is finished and accepts no further cards.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns whether this hand came out of a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Returns whether the bet was doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns whether the hand was surrendered.
    #[must_use]
    pub const fn is_surrendered(&self) -> bool {
        self.surrendered
    }

    /// Returns whether the hand holds exactly two cards and is still open.
    #[must_use]
    pub const fn can_double(&self) -> bool {
        self.can_double
    }

    /// Returns whether the hand is a pair of equal blackjack value.
    #[must_use]
    pub const fn can_split(&self) -> bool {
        self.can_split
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 first and demoted to 1 one at a time while the
    /// total exceeds 21.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards, 0).0
    }

    /// Returns whether the hand is soft (an ace still counts as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards, 0).1
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is a natural: two cards worth 21, not from a split.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21 && !self.from_split
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub(crate) const fn finish(&mut self) {
        self.finished = true;
        self.can_double = false;
    }

    pub(crate) const fn mark_split(&mut self) {
        self.from_split = true;
    }

    pub(crate) const fn double_bet(&mut self) {
        self.bet *= 2;
        self.doubled = true;
    }

    pub(crate) const fn surrender(&mut self) {
        self.surrendered = true;
        self.finish();
    }

    /// Removes and returns the second card (for splitting).
    pub(crate) fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            let card = self.cards.pop();
            self.refresh_flags();
            card
        } else {
            None
        }
    }
}

/// The dealer's hand.
///
/// Under the no-hole-card protocol the dealer holds a single up card until
/// every seat has finished; further cards are drawn face up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    cards: Vec<Card>,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the up card is an ace.
    #[must_use]
    pub fn shows_ace(&self) -> bool {
        self.up_card().is_some_and(Card::is_ace)
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards, 0).0
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards, 0).1
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
