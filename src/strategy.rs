//! Basic-strategy advisor and heuristic odds estimator.
//!
//! Advisory only: nothing here feeds back into play or settlement. The odds
//! are deliberately rough table lookups and linear formulas, not exact
//! combinatorics.

use core::iter;

use crate::card::Card;
use crate::game::Action;
use crate::hand::{Hand, evaluate_cards};

/// Copies of each rank in the synthetic remaining-card pool (six decks).
pub const SYNTHETIC_COPIES_PER_RANK: usize = 24;

/// Recommended play for a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    /// Draw a card.
    Hit,
    /// Keep the hand.
    Stand,
    /// Double the bet for exactly one card.
    Double,
    /// Split the pair.
    Split,
    /// Surrender half the bet.
    Abandon,
    /// The hand is a natural; no decision to make.
    Blackjack,
}

impl Recommendation {
    /// Returns the table action this recommendation corresponds to.
    #[must_use]
    pub const fn action(self) -> Option<Action> {
        match self {
            Self::Hit => Some(Action::Hit),
            Self::Stand => Some(Action::Stand),
            Self::Double => Some(Action::Double),
            Self::Split => Some(Action::Split),
            Self::Abandon => Some(Action::Surrender),
            Self::Blackjack => None,
        }
    }
}

/// Advisor output for one hand. Percentages are whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Advice {
    /// Recommended play.
    pub recommendation: Recommendation,
    /// Chance of busting on one more card.
    pub bust: u8,
    /// Estimated chance of winning.
    pub win: u8,
    /// Estimated chance of pushing.
    pub push: u8,
}

#[cfg(feature = "std")]
fn floor(value: f64) -> f64 {
    value.floor()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn floor(value: f64) -> f64 {
    libm::floor(value)
}

/// Rounds half up to a whole percentage.
fn percent(value: f64) -> u8 {
    floor(value + 0.5).clamp(0.0, 100.0) as u8
}

/// Dealer column in the strategy tables: the up card's blackjack value, ace as 1.
const fn dealer_column(up: &Card) -> u8 {
    up.value()
}

/// Advises on `hand` against the dealer's up card.
///
/// `cards_in_play` trims the synthetic six-deck pool used for the bust
/// estimate; it does not track the real shoe.
#[must_use]
pub fn advise(hand: &Hand, dealer_up: &Card, cards_in_play: usize) -> Advice {
    let dealer = dealer_column(dealer_up);

    if hand.is_blackjack() {
        let dealer_21 = dealer_makes_21(dealer);
        return Advice {
            recommendation: Recommendation::Blackjack,
            bust: 0,
            win: percent(100.0 - dealer_21),
            push: percent(dealer_21),
        };
    }

    let (win, push) = win_push(hand.value(), dealer_bust_chance(dealer));
    Advice {
        recommendation: recommend(hand, dealer_up),
        bust: player_bust_chance(hand, cards_in_play),
        win: percent(win).clamp(5, 95),
        push: percent(push).clamp(2, 25),
    }
}

/// Basic-strategy recommendation from the pair, soft and hard tables.
#[must_use]
pub fn recommend(hand: &Hand, dealer_up: &Card) -> Recommendation {
    use Recommendation::{Abandon, Double, Hit, Split, Stand};

    let dealer = dealer_column(dealer_up);
    let total = hand.value();

    if hand.can_split() {
        let pair = hand.cards()[0].value();
        let play = match pair {
            1 | 8 => Some(Split),
            10 => Some(Stand),
            9 if matches!(dealer, 1 | 7 | 10) => Some(Stand),
            9 => Some(Split),
            7 | 2 | 3 if dealer <= 7 => Some(Split),
            6 if dealer <= 6 => Some(Split),
            5 if dealer <= 9 => Some(Double),
            4 if matches!(dealer, 5 | 6) => Some(Split),
            2..=7 => Some(Hit),
            _ => None,
        };
        if let Some(play) = play {
            return play;
        }
    }

    if hand.is_soft() {
        return match total {
            19.. => Stand,
            18 => match dealer {
                2 | 7 | 8 => Stand,
                3..=6 => Double,
                _ => Hit,
            },
            17 if (2..=6).contains(&dealer) => Double,
            13..=16 if (4..=6).contains(&dealer) => Double,
            _ => Hit,
        };
    }

    match total {
        17.. => Stand,
        15 | 16 => match dealer {
            ..=6 => Stand,
            7..=10 => Abandon,
            _ => Hit,
        },
        13 | 14 => match dealer {
            ..=6 => Stand,
            9 | 10 => Abandon,
            _ => Hit,
        },
        12 => match dealer {
            4..=6 => Stand,
            10 => Abandon,
            _ => Hit,
        },
        11 if dealer == 1 => Hit,
        11 => Double,
        10 if dealer >= 10 => Hit,
        10 => Double,
        9 if (3..=6).contains(&dealer) => Double,
        _ => Hit,
    }
}

/// Chance that one more card busts the hand, sampled from a synthetic pool.
///
/// The pool holds [`SYNTHETIC_COPIES_PER_RANK`] of each rank in rank order
/// (aces scoring 1) minus the first `cards_in_play` entries.
#[must_use]
pub fn player_bust_chance(hand: &Hand, cards_in_play: usize) -> u8 {
    let pool = (1..=13u8)
        .flat_map(|rank| iter::repeat_n(rank.min(10), SYNTHETIC_COPIES_PER_RANK))
        .skip(cards_in_play);

    let (busts, total) = pool.fold((0u32, 0u32), |(busts, total), points| {
        let busted = evaluate_cards(hand.cards(), points).0 > 21;
        (busts + u32::from(busted), total + 1)
    });

    if total == 0 {
        return 0;
    }
    percent(f64::from(busts) / f64::from(total) * 100.0)
}

/// Fixed dealer bust chance by up-card column.
#[must_use]
pub const fn dealer_bust_chance(dealer: u8) -> u8 {
    match dealer {
        1 => 12,
        2 => 35,
        3 => 37,
        4 => 40,
        5 | 6 => 42,
        7 => 26,
        8 => 24,
        9 => 23,
        10 => 21,
        _ => 25,
    }
}

/// Fixed chance the dealer finishes on 21, used against a player natural.
///
/// An ace column has no entry of its own and takes the 7.0 default.
const fn dealer_makes_21(dealer: u8) -> f64 {
    match dealer {
        10 => 7.7,
        2 => 7.4,
        3 => 7.2,
        4 => 6.8,
        5 => 6.2,
        6 => 5.8,
        7 => 8.1,
        8 => 7.8,
        9 => 7.5,
        _ => 7.0,
    }
}

/// Raw (unclamped) win and push estimates.
fn win_push(total: u8, dealer_bust: u8) -> (f64, f64) {
    let bust = f64::from(dealer_bust);
    let stand = 100.0 - bust;
    let total = f64::from(total);
    let short = 21.0 - total;

    if total > 21.0 {
        (0.0, 0.0)
    } else if total >= 21.0 {
        ((bust + 20.0).max(70.0), (stand * 0.1).min(15.0))
    } else if total >= 19.0 {
        (bust + short * 8.0, (short * 2.0).max(5.0))
    } else if total >= 17.0 {
        (bust + short * 4.0, (short * 3.0).max(8.0))
    } else {
        ((bust - (17.0 - total) * 2.0).max(15.0), short.max(3.0))
    }
}
