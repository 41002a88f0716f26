//! Game configuration options.

use core::time::Duration;

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest, halves up.
    Nearest,
}

impl RoundingMode {
    /// Divides `numerator` by `denominator` using this rounding mode.
    #[must_use]
    pub const fn divide(self, numerator: u64, denominator: u64) -> u64 {
        match self {
            Self::Down => numerator / denominator,
            Self::Up => numerator.div_ceil(denominator),
            Self::Nearest => (numerator * 2 + denominator) / (denominator * 2),
        }
    }
}

/// Presentation pacing hints attached to every emitted transition.
///
/// The engine never waits on these; a presenter may sleep for `delay`
/// before rendering the event. Zeroing them never changes outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pacing {
    /// Between cards of the initial distribution.
    pub deal: Duration,
    /// After the distribution, before insurance or the first turn.
    pub reveal: Duration,
    /// After a hit card.
    pub hit: Duration,
    /// After a double-down card.
    pub double: Duration,
    /// Between the two cards dealt after a split.
    pub split: Duration,
    /// Between successive insurance offers.
    pub insurance: Duration,
    /// After a player blackjack is announced.
    pub blackjack: Duration,
    /// Between dealer draws.
    pub dealer_draw: Duration,
    /// Between per-hand settlement results.
    pub settle: Duration,
}

impl Pacing {
    /// Table-speed pacing.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            deal: Duration::from_millis(600),
            reveal: Duration::from_millis(500),
            hit: Duration::from_millis(700),
            double: Duration::from_millis(1000),
            split: Duration::from_millis(800),
            insurance: Duration::from_millis(1000),
            blackjack: Duration::from_millis(2000),
            dealer_draw: Duration::from_millis(1000),
            settle: Duration::from_millis(300),
        }
    }

    /// No delays at all.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            deal: Duration::ZERO,
            reveal: Duration::ZERO,
            hit: Duration::ZERO,
            double: Duration::ZERO,
            split: Duration::ZERO,
            insurance: Duration::ZERO,
            blackjack: Duration::ZERO,
            dealer_draw: Duration::ZERO,
            settle: Duration::ZERO,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::standard()
    }
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use boxjack::{GameOptions, Pacing};
///
/// let options = GameOptions::default()
///     .with_decks(8)
///     .with_starting_bankroll(500)
///     .with_pacing(Pacing::instant());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks per shoe build.
    pub decks: u8,
    /// The shoe is rebuilt when fewer cards than this remain before a draw.
    pub reshuffle_threshold: usize,
    /// Bankroll for a fresh table and for [`crate::Game::reset_bankroll`].
    pub starting_bankroll: u64,
    /// Maximum number of hands a seat may hold after splitting.
    pub max_hands_per_seat: usize,
    /// Rounding mode for the 3:2 blackjack bonus.
    pub rounding_blackjack: RoundingMode,
    /// Rounding mode for the half bet forfeited on surrender.
    pub rounding_surrender: RoundingMode,
    /// Presentation pacing hints.
    pub pacing: Pacing,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            reshuffle_threshold: 20,
            starting_bankroll: 1000,
            max_hands_per_seat: 3,
            rounding_blackjack: RoundingMode::Down,
            rounding_surrender: RoundingMode::Down,
            pacing: Pacing::standard(),
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use boxjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the shoe rebuild threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use boxjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_threshold(52);
    /// assert_eq!(options.reshuffle_threshold, 52);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use boxjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_bankroll(250);
    /// assert_eq!(options.starting_bankroll, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: u64) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the maximum number of hands per seat.
    #[must_use]
    pub const fn with_max_hands_per_seat(mut self, hands: usize) -> Self {
        self.max_hands_per_seat = hands;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use boxjack::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the rounding mode for the surrender forfeit.
    #[must_use]
    pub const fn with_rounding_surrender(mut self, mode: RoundingMode) -> Self {
        self.rounding_surrender = mode;
        self
    }

    /// Sets the pacing hints.
    ///
    /// # Example
    ///
    /// ```
    /// use boxjack::{GameOptions, Pacing};
    ///
    /// let options = GameOptions::default().with_pacing(Pacing::instant());
    /// assert_eq!(options.pacing, Pacing::instant());
    /// ```
    #[must_use]
    pub const fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }
}
