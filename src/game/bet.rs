use alloc::vec::Vec;
use core::time::Duration;

use tracing::{debug, info};

use crate::error::{BetError, DealError};
use crate::event::TableEvent;
use crate::seat::SEAT_COUNT;

use super::{Game, RoundState};

impl Game {
    fn ensure_betting(&self) -> Result<(), BetError> {
        if self.state != RoundState::Betting {
            return Err(BetError::InvalidState);
        }
        Ok(())
    }

    fn set_seat_bet(&mut self, index: usize, bet: u64) {
        let seat = &mut self.seats[index];
        seat.set_bet(bet);
        let number = seat.number();
        self.emit(TableEvent::BetChanged { seat: number, bet }, Duration::ZERO);
    }

    /// Adds `amount` to a seat's stake.
    ///
    /// Credits are only debited when the round starts, but the total staked
    /// across all seats can never exceed the bankroll.
    ///
    /// Returns the seat's new stake.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not betting, the amount is zero, the
    /// seat does not exist, or the bankroll cannot cover the new total.
    ///
    /// # Example
    ///
    /// ```
    /// use boxjack::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 7);
    /// game.place_bet(1, 25).unwrap();
    /// assert_eq!(game.place_bet(1, 25), Ok(50));
    /// assert_eq!(game.total_bet(), 50);
    /// ```
    pub fn place_bet(&mut self, seat: u8, amount: u64) -> Result<u64, BetError> {
        self.ensure_betting()?;
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        let index = Self::seat_index(seat).ok_or(BetError::SeatNotFound)?;

        let total = self
            .total_bet()
            .checked_add(amount)
            .ok_or(BetError::InsufficientFunds)?;
        if total > self.bankroll {
            return Err(BetError::InsufficientFunds);
        }

        let bet = self.seats[index].bet() + amount;
        self.set_seat_bet(index, bet);
        debug!(seat, bet, "bet placed");

        Ok(bet)
    }

    /// Removes the stake from a seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not betting or the seat does not
    /// exist.
    pub fn clear_bet(&mut self, seat: u8) -> Result<(), BetError> {
        self.ensure_betting()?;
        let index = Self::seat_index(seat).ok_or(BetError::SeatNotFound)?;

        if self.seats[index].bet() > 0 {
            self.set_seat_bet(index, 0);
            debug!(seat, "bet cleared");
        }
        Ok(())
    }

    /// Removes the stakes from every seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not betting.
    pub fn clear_all_bets(&mut self) -> Result<(), BetError> {
        self.ensure_betting()?;
        for index in 0..SEAT_COUNT {
            if self.seats[index].bet() > 0 {
                self.set_seat_bet(index, 0);
            }
        }
        Ok(())
    }

    /// Replaces the table's stakes with those of the last started round.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not betting, no round has been
    /// started yet, or the bankroll cannot cover the repeated stakes.
    pub fn repeat_last_bets(&mut self) -> Result<(), BetError> {
        self.ensure_betting()?;

        let total = self
            .last_bets
            .iter()
            .try_fold(0u64, |sum, &bet| sum.checked_add(bet))
            .ok_or(BetError::InsufficientFunds)?;
        if total == 0 {
            return Err(BetError::NoPreviousBets);
        }
        if total > self.bankroll {
            return Err(BetError::InsufficientFunds);
        }

        for index in 0..SEAT_COUNT {
            let bet = self.last_bets[index];
            if self.seats[index].bet() != bet {
                self.set_seat_bet(index, bet);
            }
        }
        debug!(total, "last bets repeated");

        Ok(())
    }

    /// Returns the total staked across all seats.
    #[must_use]
    pub fn total_bet(&self) -> u64 {
        self.seats.iter().map(|seat| seat.bet()).sum()
    }

    /// Returns the stakes of the last started round, by seat index.
    #[must_use]
    pub const fn last_bets(&self) -> &[u64; SEAT_COUNT] {
        &self.last_bets
    }

    /// Debits the stakes and deals the opening cards.
    ///
    /// Each staked seat receives a card in ascending order, then the dealer
    /// receives the up card, then each seat receives its second card. The
    /// dealer takes no hole card. An ace up card opens insurance; otherwise
    /// play begins with the first seat holding an open hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not betting, nothing is staked, or
    /// the bankroll cannot cover the stakes.
    pub fn start_round(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::Betting {
            return Err(DealError::InvalidState);
        }
        let wager = self.total_bet();
        if wager == 0 {
            return Err(DealError::NoBets);
        }
        if wager > self.bankroll {
            return Err(DealError::InsufficientFunds);
        }

        self.bankroll -= wager;
        for (last, seat) in self.last_bets.iter_mut().zip(&self.seats) {
            *last = seat.bet();
        }
        self.dealer.clear();
        self.result = None;
        self.turn = None;

        let staked: Vec<usize> = (0..SEAT_COUNT)
            .filter(|&index| self.seats[index].bet() > 0)
            .collect();
        for &index in &staked {
            self.seats[index].activate();
        }

        info!(wager, seats = staked.len(), "round started");
        self.emit(TableEvent::RoundStarted { wager }, Duration::ZERO);
        self.set_state(RoundState::Playing);

        let deal = self.options.pacing.deal;
        for &index in &staked {
            self.deal_to_hand(index, 0, deal);
        }
        self.deal_to_dealer(deal);
        for &index in &staked {
            self.deal_to_hand(index, 0, deal);
        }

        if self.dealer.shows_ace() {
            self.open_insurance();
        } else {
            self.begin_turns();
        }

        Ok(())
    }

    /// Closes every opening natural, then hands play to the first open seat.
    ///
    /// A dealer natural settles the round at once. Holding only the up card,
    /// the dealer cannot have one yet.
    pub(super) fn begin_turns(&mut self) {
        if self.dealer.is_blackjack() {
            self.settle_round();
            return;
        }
        if self.state != RoundState::Playing {
            self.set_state(RoundState::Playing);
        }

        let blackjack = self.options.pacing.blackjack;
        for index in 0..SEAT_COUNT {
            let seat = &mut self.seats[index];
            if !seat.is_active() {
                continue;
            }
            let Some(hand) = seat.current_hand_mut() else {
                continue;
            };
            if hand.is_blackjack() {
                hand.finish();
                seat.finish();
                let number = seat.number();
                debug!(seat = number, "natural dealt");
                self.emit(TableEvent::PlayerBlackjack { seat: number }, blackjack);
            }
        }

        self.advance_to_open_seat(0);
    }
}
