use alloc::vec::Vec;
use core::time::Duration;

use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::event::TableEvent;

use super::{Action, Game, RoundState};

impl Game {
    /// Checks an action against the active hand and returns the seat index.
    fn validate_action(&self, seat: u8, action: Action) -> Result<usize, ActionError> {
        if self.state != RoundState::Playing {
            return Err(ActionError::InvalidState);
        }
        let index = Self::seat_index(seat).ok_or(ActionError::SeatNotFound)?;
        if self.turn != Some(index) {
            return Err(ActionError::NotYourTurn);
        }

        let seat = &self.seats[index];
        let hand = seat.current_hand().ok_or(ActionError::NotYourTurn)?;
        if hand.is_finished() {
            return Err(ActionError::HandFinished);
        }

        match action {
            Action::Hit | Action::Stand => {}
            Action::Double => {
                if !hand.can_double() {
                    return Err(ActionError::CannotDouble);
                }
                if self.bankroll < hand.bet() {
                    return Err(ActionError::InsufficientFunds);
                }
            }
            Action::Split => {
                if !hand.can_split() {
                    return Err(ActionError::CannotSplit);
                }
                if seat.hands().len() >= self.options.max_hands_per_seat {
                    return Err(ActionError::MaxHandsReached);
                }
                if self.bankroll < hand.bet() {
                    return Err(ActionError::InsufficientFunds);
                }
            }
            Action::Surrender => {
                if hand.len() != 2 || seat.hands().len() != 1 || self.dealer.shows_ace() {
                    return Err(ActionError::CannotSurrender);
                }
            }
        }

        Ok(index)
    }

    /// Returns whether `action` is currently legal for a seat's active hand.
    ///
    /// # Errors
    ///
    /// Returns the error [`Game::act`] would return, without changing state.
    pub fn check_action(&self, seat: u8, action: Action) -> Result<(), ActionError> {
        self.validate_action(seat, action).map(|_| ())
    }

    /// Returns every action currently legal for a seat's active hand.
    #[must_use]
    pub fn available_actions(&self, seat: u8) -> Vec<Action> {
        [
            Action::Hit,
            Action::Stand,
            Action::Double,
            Action::Split,
            Action::Surrender,
        ]
        .into_iter()
        .filter(|&action| self.validate_action(seat, action).is_ok())
        .collect()
    }

    /// Applies a player decision to the seat's active hand.
    ///
    /// Whenever the hand ends up finished, play moves to the next open hand
    /// of the same seat, then to the following seats, then to the dealer.
    /// Once the dealer has drawn, the round is settled before this returns.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the table untouched, if play is not under
    /// way, it is not this seat's turn, or the action is not eligible for the
    /// hand.
    pub fn act(&mut self, seat: u8, action: Action) -> Result<(), ActionError> {
        let index = self.validate_action(seat, action)?;
        debug!(seat, ?action, "player action");

        match action {
            Action::Hit => self.hit(index),
            Action::Stand => self.finish_active_hand(index),
            Action::Double => self.double(index),
            Action::Split => self.split(index),
            Action::Surrender => self.surrender(index),
        }

        Ok(())
    }

    fn hit(&mut self, index: usize) {
        let cursor = self.seats[index].cursor();
        self.deal_to_hand(index, cursor, self.options.pacing.hit);

        let busted = self.seats[index]
            .current_hand()
            .is_some_and(|hand| hand.is_busted());
        if busted {
            self.finish_active_hand(index);
        }
    }

    fn double(&mut self, index: usize) {
        let seat = &mut self.seats[index];
        let cursor = seat.cursor();
        if let Some(hand) = seat.current_hand_mut() {
            self.bankroll -= hand.bet();
            hand.double_bet();
        }
        self.statistics.doubles += 1;

        self.deal_to_hand(index, cursor, self.options.pacing.double);
        self.finish_active_hand(index);
    }

    fn split(&mut self, index: usize) {
        let seat = &mut self.seats[index];
        let cursor = seat.cursor();
        let Some(hand) = seat.current_hand() else {
            return;
        };
        let (bet, aces) = (hand.bet(), hand.cards().first().is_some_and(Card::is_ace));
        let Some((split_index, _)) = seat.split_current() else {
            return;
        };
        self.bankroll -= bet;
        self.statistics.splits += 1;

        let delay = self.options.pacing.split;
        self.deal_to_hand(index, cursor, delay);
        self.deal_to_hand(index, split_index, delay);

        if aces {
            self.close_hand(index, split_index);
            self.finish_active_hand(index);
        }
    }

    fn surrender(&mut self, index: usize) {
        let mode = self.options.rounding_surrender;
        if let Some(hand) = self.seats[index].current_hand_mut() {
            let bet = hand.bet();
            self.bankroll += bet - mode.divide(bet, 2);
            hand.surrender();
        }
        self.finish_active_hand(index);
    }

    /// Marks one hand finished and announces it.
    fn close_hand(&mut self, index: usize, hand_index: usize) {
        let seat = &mut self.seats[index];
        let number = seat.number();
        let Some(hand) = seat.hand_mut(hand_index) else {
            return;
        };
        hand.finish();
        let status = hand.status();
        self.emit(
            TableEvent::HandFinished {
                seat: number,
                hand: hand_index,
                status,
            },
            Duration::ZERO,
        );
    }

    /// Closes the active hand and moves play forward.
    fn finish_active_hand(&mut self, index: usize) {
        let cursor = self.seats[index].cursor();
        self.close_hand(index, cursor);

        let seat = &mut self.seats[index];
        if seat.seek_open_hand(cursor + 1) {
            let (number, hand) = (seat.number(), seat.cursor());
            self.emit(
                TableEvent::TurnStarted { seat: number, hand },
                Duration::ZERO,
            );
        } else {
            self.advance_to_open_seat(index + 1);
        }
    }
}
