//! Table engine and round orchestration.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::time::Duration;

use tracing::info;

use crate::card::Card;
use crate::error::RoundError;
use crate::event::{PacedEvent, TableEvent};
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::seat::{SEAT_COUNT, Seat};
use crate::shoe::Shoe;
use crate::stats::{Snapshot, Statistics};
use crate::strategy::{self, Advice};

mod actions;
mod bet;
mod dealer;
mod insurance;
pub mod state;

pub use state::{Action, InsuranceDecision, InsuranceRecord, RoundState, TurnPosition};

/// A multi-seat blackjack table dealt under the European no-hole-card rule.
///
/// The game exclusively owns the shoe, the bankroll, the seats and the
/// dealer's hand. Every command either completes its transition or returns
/// an error without touching state. Transitions are queued as
/// [`PacedEvent`]s for a presentation layer to drain.
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
    shoe: Shoe,
    state: RoundState,
    bankroll: u64,
    seats: [Seat; SEAT_COUNT],
    last_bets: [u64; SEAT_COUNT],
    dealer: DealerHand,
    /// Index of the seat holding the globally active hand.
    turn: Option<usize>,
    insurance: [InsuranceRecord; SEAT_COUNT],
    statistics: Statistics,
    result: Option<RoundResult>,
    events: VecDeque<PacedEvent>,
}

impl Game {
    /// Creates a new table with the configured starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use boxjack::{Game, GameOptions, RoundState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), RoundState::Betting);
    /// assert_eq!(game.bankroll(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let snapshot = Snapshot {
            bankroll: options.starting_bankroll,
            statistics: Statistics::default(),
        };
        Self::from_snapshot(options, seed, snapshot)
    }

    /// Creates a table restoring a persisted bankroll and statistics.
    #[must_use]
    pub fn from_snapshot(options: GameOptions, seed: u64, snapshot: Snapshot) -> Self {
        let shoe = Shoe::new(options.decks, options.reshuffle_threshold, seed);

        Self {
            options,
            shoe,
            state: RoundState::Betting,
            bankroll: snapshot.bankroll,
            seats: core::array::from_fn(|index| Seat::new(index as u8 + 1)),
            last_bets: [0; SEAT_COUNT],
            dealer: DealerHand::new(),
            turn: None,
            insurance: [InsuranceRecord::default(); SEAT_COUNT],
            statistics: snapshot.statistics,
            result: None,
            events: VecDeque::new(),
        }
    }

    /// Exports the state a presentation layer persists.
    ///
    /// Stakes on the table are not part of the snapshot; take it while
    /// betting with an empty table to capture the full bankroll.
    #[must_use]
    pub const fn snapshot(&self) -> Snapshot {
        Snapshot {
            bankroll: self.bankroll,
            statistics: self.statistics,
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the credits available to bet.
    #[must_use]
    pub const fn bankroll(&self) -> u64 {
        self.bankroll
    }

    /// Returns the aggregate statistics.
    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Returns all seats in ascending order.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Returns the seat with the given 1-based number.
    #[must_use]
    pub fn seat(&self, seat: u8) -> Option<&Seat> {
        Self::seat_index(seat).map(|index| &self.seats[index])
    }

    /// Returns the dealer's hand.
    ///
    /// Under the no-hole-card rule it only holds the up card until the
    /// dealer's turn.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }


    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns the number of cards on the table (dealer and active seats).
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        let seated: usize = self
            .seats
            .iter()
            .filter(|seat| seat.is_active())
            .flat_map(Seat::hands)
            .map(Hand::len)
            .sum();
        seated + self.dealer.len()
    }

    /// Returns the position of the globally active hand, if any.
    #[must_use]
    pub fn current_turn(&self) -> Option<TurnPosition> {
        let index = self.turn?;
        Some(TurnPosition {
            seat: self.seats[index].number(),
            hand_index: self.seats[index].cursor(),
        })
    }

    /// Returns the globally active hand, if any.
    #[must_use]
    pub fn current_hand(&self) -> Option<&Hand> {
        self.turn
            .and_then(|index| self.seats[index].current_hand())
    }

    /// Returns the insurance record for a seat.
    #[must_use]
    pub fn insurance(&self, seat: u8) -> Option<InsuranceRecord> {
        Self::seat_index(seat).map(|index| self.insurance[index])
    }

    /// Returns the settlement of the round while it is finished.
    #[must_use]
    pub const fn round_result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Returns advice for the globally active hand.
    #[must_use]
    pub fn advice(&self) -> Option<Advice> {
        let hand = self.current_hand()?;
        let up = self.dealer.up_card()?;
        Some(strategy::advise(hand, up, self.cards_in_play()))
    }

    /// Returns advice for a seat's hand under its cursor.
    #[must_use]
    pub fn advice_for(&self, seat: u8) -> Option<Advice> {
        let seat = self.seat(seat)?;
        if !seat.is_active() {
            return None;
        }
        let hand = seat.current_hand().filter(|hand| !hand.is_empty())?;
        let up = self.dealer.up_card()?;
        Some(strategy::advise(hand, up, self.cards_in_play()))
    }

    /// Takes every queued transition event, oldest first.
    pub fn drain_events(&mut self) -> Vec<PacedEvent> {
        self.events.drain(..).collect()
    }

    /// Clears the finished round and returns to betting.
    ///
    /// Bets, hands, the dealer's hand and insurance are cleared; the
    /// bankroll, statistics and last bets persist. Calling this while
    /// already betting does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is still being played.
    pub fn advance_round(&mut self) -> Result<(), RoundError> {
        match self.state {
            RoundState::Betting => Ok(()),
            RoundState::Finished => {
                self.clear_round();
                Ok(())
            }
            RoundState::Insurance | RoundState::Playing | RoundState::Dealer => {
                Err(RoundError::InvalidState)
            }
        }
    }

    fn clear_round(&mut self) {
        for seat in &mut self.seats {
            seat.reset();
        }
        self.dealer.clear();
        self.insurance = [InsuranceRecord::default(); SEAT_COUNT];
        self.turn = None;
        self.result = None;
        self.state = RoundState::Betting;
        self.emit(TableEvent::RoundReset, Duration::ZERO);
        info!(bankroll = self.bankroll, "round reset");
    }

    fn ensure_idle_table(&self) -> Result<(), RoundError> {
        if self.state != RoundState::Betting || self.total_bet() > 0 {
            return Err(RoundError::InvalidState);
        }
        Ok(())
    }

    /// Places `draws` on top of the shoe so the next round deals them in order.
    ///
    /// Used to replay a known sequence of cards.
    ///
    /// # Errors
    ///
    /// Returns an error unless the table is betting.
    pub fn stack_shoe(&mut self, draws: &[Card]) -> Result<(), RoundError> {
        if self.state != RoundState::Betting {
            return Err(RoundError::InvalidState);
        }
        self.shoe.stack(draws);
        Ok(())
    }

    /// Restores the configured starting bankroll.
    ///
    /// # Errors
    ///
    /// Returns an error unless the table is betting with no stakes placed.
    pub fn reset_bankroll(&mut self) -> Result<(), RoundError> {
        self.ensure_idle_table()?;
        self.bankroll = self.options.starting_bankroll;
        info!(bankroll = self.bankroll, "bankroll reset");
        Ok(())
    }

    /// Zeroes the aggregate statistics.
    ///
    /// # Errors
    ///
    /// Returns an error unless the table is betting with no stakes placed.
    pub fn reset_statistics(&mut self) -> Result<(), RoundError> {
        self.ensure_idle_table()?;
        self.statistics = Statistics::default();
        info!("statistics reset");
        Ok(())
    }

    /// Maps a 1-based seat number to an index.
    pub(crate) fn seat_index(seat: u8) -> Option<usize> {
        let index = usize::from(seat).checked_sub(1)?;
        (index < SEAT_COUNT).then_some(index)
    }

    fn emit(&mut self, event: TableEvent, delay: Duration) {
        self.events.push_back(PacedEvent { event, delay });
    }

    fn set_state(&mut self, state: RoundState) {
        self.state = state;
        self.emit(TableEvent::StateChanged(state), Duration::ZERO);
    }

    fn draw(&mut self) -> Card {
        let rebuilds = self.shoe.reshuffles();
        let card = self.shoe.draw();
        if self.shoe.reshuffles() != rebuilds {
            self.emit(TableEvent::ShoeReshuffled, Duration::ZERO);
        }
        card
    }

    /// Deals one card face up to a seat's hand.
    fn deal_to_hand(&mut self, index: usize, hand_index: usize, delay: Duration) -> Card {
        let card = self.draw();
        let seat = &mut self.seats[index];
        if let Some(hand) = seat.hand_mut(hand_index) {
            hand.add_card(card);
        }
        let number = seat.number();
        self.emit(
            TableEvent::CardDealt {
                seat: number,
                hand: hand_index,
                card,
            },
            delay,
        );
        card
    }

    fn deal_to_dealer(&mut self, delay: Duration) -> Card {
        let card = self.draw();
        self.dealer.add_card(card);
        self.emit(TableEvent::DealerCard { card }, delay);
        card
    }

    /// Makes the first unfinished hand at or after seat `from` the active one.
    ///
    /// Hands to the dealer when no seat has anything left to play.
    fn advance_to_open_seat(&mut self, from: usize) {
        for index in from..SEAT_COUNT {
            let seat = &mut self.seats[index];
            if seat.is_active() && !seat.is_finished() && seat.seek_open_hand(0) {
                self.turn = Some(index);
                let (number, hand) = (seat.number(), seat.cursor());
                self.emit(
                    TableEvent::TurnStarted { seat: number, hand },
                    Duration::ZERO,
                );
                return;
            }
        }

        self.turn = None;
        self.play_dealer();
    }
}
