use alloc::vec::Vec;

use tracing::{debug, info};

use crate::event::TableEvent;
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::result::{HandOutcome, HandResult, RoundResult, SeatResult};
use crate::seat::SEAT_COUNT;

use super::{Game, InsuranceDecision, RoundState};

/// Dealer stands on every 17, soft or hard.
const DEALER_STANDS_ON: u8 = 17;

#[expect(
    clippy::cast_possible_wrap,
    reason = "stakes are bounded by the bankroll, far below i64::MAX"
)]
const fn signed(amount: u64) -> i64 {
    amount as i64
}

/// Settles one hand against the dealer's final hand.
fn settle_hand(
    options: &GameOptions,
    seat: u8,
    hand_index: usize,
    hand: &Hand,
    dealer: &DealerHand,
) -> HandResult {
    let bet = hand.bet();
    let player_value = hand.value();
    let dealer_value = dealer.value();

    let (outcome, payout, net) = if hand.is_surrendered() {
        let forfeit = options.rounding_surrender.divide(bet, 2);
        (HandOutcome::Surrendered, 0, -signed(forfeit))
    } else if hand.is_busted() {
        (HandOutcome::Lose, 0, -signed(bet))
    } else if dealer.is_blackjack() {
        if hand.is_blackjack() {
            (HandOutcome::Push, bet, 0)
        } else {
            (HandOutcome::Lose, 0, -signed(bet))
        }
    } else if dealer.is_bust() || player_value > dealer_value {
        if hand.is_blackjack() {
            let winnings = options.rounding_blackjack.divide(bet * 3, 2);
            (HandOutcome::Blackjack, bet + winnings, signed(winnings))
        } else {
            (HandOutcome::Win, bet * 2, signed(bet))
        }
    } else if player_value == dealer_value {
        (HandOutcome::Push, bet, 0)
    } else {
        (HandOutcome::Lose, 0, -signed(bet))
    };

    HandResult {
        seat,
        hand_index,
        outcome,
        bet,
        payout,
        net,
        busted: hand.is_busted(),
        player_value,
        dealer_value,
    }
}

impl Game {
    /// Draws the dealer's hand out and settles the round.
    pub(super) fn play_dealer(&mut self) {
        self.turn = None;
        self.set_state(RoundState::Dealer);

        let reveal = self.options.pacing.reveal;
        let draw = self.options.pacing.dealer_draw;
        let mut delay = reveal;
        while self.dealer.value() < DEALER_STANDS_ON {
            let card = self.deal_to_dealer(delay);
            debug!(%card, value = self.dealer.value(), "dealer draws");
            delay = draw;
        }

        self.settle_round();
    }

    /// Pays out every active seat and finishes the round.
    pub(super) fn settle_round(&mut self) {
        self.turn = None;
        let dealer_blackjack = self.dealer.is_blackjack();
        let settle = self.options.pacing.settle;

        let mut seats = Vec::new();
        let mut round_net = 0i64;

        for index in 0..SEAT_COUNT {
            let seat = &self.seats[index];
            if !seat.is_active() {
                continue;
            }
            let number = seat.number();
            let hands: Vec<HandResult> = seat
                .hands()
                .iter()
                .enumerate()
                .map(|(hand_index, hand)| {
                    settle_hand(&self.options, number, hand_index, hand, &self.dealer)
                })
                .collect();

            let record = self.insurance[index];
            let insurance_bet = if record.decision == InsuranceDecision::Taken {
                record.bet
            } else {
                0
            };
            let insurance_payout = if dealer_blackjack { insurance_bet * 2 } else { 0 };

            let mut total_payout = insurance_payout;
            let mut net = signed(insurance_payout) - signed(insurance_bet);
            for result in &hands {
                total_payout += result.payout;
                net += result.net;
                self.statistics.record_hand(result);
                self.emit(TableEvent::HandSettled(*result), settle);
            }
            if insurance_bet > 0 {
                self.emit(
                    TableEvent::InsuranceSettled {
                        seat: number,
                        payout: insurance_payout,
                    },
                    settle,
                );
            }

            self.bankroll += total_payout;
            round_net += net;
            seats.push(SeatResult {
                seat: number,
                hands,
                total_payout,
                net,
                insurance_bet,
                insurance_payout,
            });
        }

        self.statistics.record_round(round_net);
        self.result = Some(RoundResult {
            seats,
            dealer_value: self.dealer.value(),
            dealer_bust: self.dealer.is_bust(),
            dealer_blackjack,
            net: round_net,
        });

        info!(
            dealer = self.dealer.value(),
            net = round_net,
            bankroll = self.bankroll,
            "round settled"
        );
        self.emit(TableEvent::RoundSettled { net: round_net }, settle);
        self.set_state(RoundState::Finished);
    }
}
