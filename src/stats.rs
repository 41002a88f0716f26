//! Aggregate play statistics and the persisted snapshot.

use serde::{Deserialize, Serialize};

use crate::result::{HandOutcome, HandResult};

/// Running totals across every settled hand.
///
/// Purely a reporting record: nothing in settlement reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    /// Rounds settled.
    pub rounds_played: u64,
    /// Hands settled.
    pub hands_played: u64,
    /// Hands won (naturals included).
    pub wins: u64,
    /// Hands lost (busts included).
    pub losses: u64,
    /// Hands pushed.
    pub pushes: u64,
    /// Naturals paid 3:2.
    pub blackjacks: u64,
    /// Hands that went over 21.
    pub busts: u64,
    /// Hands surrendered.
    pub surrenders: u64,
    /// Splits performed.
    pub splits: u64,
    /// Double downs performed.
    pub doubles: u64,
    /// Insurance bets taken.
    pub insurances_taken: u64,
    /// Net winnings across all settled hands.
    pub net_winnings: i64,
    /// Best round net.
    pub biggest_win: i64,
    /// Worst round net, as a positive amount.
    pub biggest_loss: i64,
}

impl Statistics {
    /// Folds one settled hand into the totals.
    pub fn record_hand(&mut self, result: &HandResult) {
        self.hands_played += 1;
        self.net_winnings += result.net;

        match result.outcome {
            HandOutcome::Surrendered => self.surrenders += 1,
            HandOutcome::Win => self.wins += 1,
            HandOutcome::Blackjack => {
                self.wins += 1;
                self.blackjacks += 1;
            }
            HandOutcome::Push => self.pushes += 1,
            HandOutcome::Lose => {
                self.losses += 1;
                if result.busted {
                    self.busts += 1;
                }
            }
        }
    }

    /// Folds a round's net result into the round counters.
    pub fn record_round(&mut self, net: i64) {
        self.rounds_played += 1;
        if net > self.biggest_win {
            self.biggest_win = net;
        }
        if -net > self.biggest_loss {
            self.biggest_loss = -net;
        }
    }

    fn rate(&self, count: u64) -> f64 {
        if self.hands_played == 0 {
            return 0.0;
        }
        #[expect(
            clippy::cast_precision_loss,
            reason = "hand counts stay far below f64 precision limits"
        )]
        let rate = count as f64 / self.hands_played as f64 * 100.0;
        rate
    }

    /// Percentage of settled hands won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        self.rate(self.wins)
    }

    /// Percentage of settled hands pushed.
    #[must_use]
    pub fn push_rate(&self) -> f64 {
        self.rate(self.pushes)
    }

    /// Percentage of settled hands that were paid naturals.
    #[must_use]
    pub fn blackjack_rate(&self) -> f64 {
        self.rate(self.blackjacks)
    }

    /// Percentage of settled hands that busted.
    #[must_use]
    pub fn bust_rate(&self) -> f64 {
        self.rate(self.busts)
    }

    /// Average net winnings per settled hand.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "hand counts and winnings stay far below f64 precision limits"
    )]
    pub fn net_per_hand(&self) -> f64 {
        self.net_winnings as f64 / self.hands_played.max(1) as f64
    }
}

/// The state a presentation layer persists between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    /// Credits available to bet.
    pub bankroll: u64,
    /// Aggregate statistics.
    pub statistics: Statistics,
}
