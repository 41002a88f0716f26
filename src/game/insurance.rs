use core::time::Duration;

use tracing::debug;

use crate::error::InsuranceError;
use crate::event::TableEvent;
use crate::seat::SEAT_COUNT;

use super::{Game, InsuranceDecision, InsuranceRecord, RoundState};

impl Game {
    /// Index of the first active seat still owing an insurance answer.
    fn pending_insurance(&self) -> Option<usize> {
        (0..SEAT_COUNT).find(|&index| {
            self.seats[index].is_active()
                && self.insurance[index].decision == InsuranceDecision::Undecided
        })
    }

    /// Insurance costs half the seat's stake, rounded down.
    fn insurance_cost(&self, index: usize) -> u64 {
        self.seats[index].bet() / 2
    }

    pub(super) fn open_insurance(&mut self) {
        debug!("dealer shows an ace, offering insurance");
        self.set_state(RoundState::Insurance);
        self.offer_next_insurance(Duration::ZERO);
    }

    fn offer_next_insurance(&mut self, delay: Duration) {
        if let Some(index) = self.pending_insurance() {
            let cost = self.insurance_cost(index);
            let seat = self.seats[index].number();
            self.emit(TableEvent::InsuranceOffered { seat, cost }, delay);
        } else {
            self.begin_turns();
        }
    }

    /// Returns the seat currently offered insurance and what it would cost.
    #[must_use]
    pub fn insurance_offer(&self) -> Option<(u8, u64)> {
        if self.state != RoundState::Insurance {
            return None;
        }
        let index = self.pending_insurance()?;
        Some((self.seats[index].number(), self.insurance_cost(index)))
    }

    /// Answers the insurance offer for a seat.
    ///
    /// Seats are asked one at a time in ascending order. Taking insurance
    /// debits half the seat's stake; it pays twice that back if the dealer
    /// completes a natural. Once the last seat has answered, play begins.
    ///
    /// Returns the stake debited (0 when declined). A stake too small to
    /// halve costs nothing, so taking it is recorded as declining.
    ///
    /// # Errors
    ///
    /// Returns an error if insurance is not being offered, the seat does not
    /// exist or is not the one being asked, or the bankroll cannot cover the
    /// stake.
    pub fn decide_insurance(&mut self, seat: u8, take: bool) -> Result<u64, InsuranceError> {
        if self.state != RoundState::Insurance {
            return Err(InsuranceError::InvalidState);
        }
        let index = Self::seat_index(seat).ok_or(InsuranceError::SeatNotFound)?;
        if self.pending_insurance() != Some(index) {
            return Err(InsuranceError::NotOffered);
        }

        let cost = self.insurance_cost(index);
        let take = take && cost > 0;
        let record = if take {
            if self.bankroll < cost {
                return Err(InsuranceError::InsufficientFunds);
            }
            self.bankroll -= cost;
            self.statistics.insurances_taken += 1;
            InsuranceRecord {
                bet: cost,
                decision: InsuranceDecision::Taken,
            }
        } else {
            InsuranceRecord {
                bet: 0,
                decision: InsuranceDecision::Declined,
            }
        };
        self.insurance[index] = record;

        debug!(seat, taken = take, stake = record.bet, "insurance decided");
        self.emit(
            TableEvent::InsuranceDecided {
                seat,
                taken: take,
                stake: record.bet,
            },
            Duration::ZERO,
        );
        self.offer_next_insurance(self.options.pacing.insurance);

        Ok(record.bet)
    }
}
