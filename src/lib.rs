//! A multi-seat blackjack engine dealt under the European no-hole-card rule,
//! with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the full round flow for up
//! to six betting seats: betting, the opening deal, insurance, player
//! actions across split hands, dealer drawing and settlement. A
//! [basic-strategy advisor](strategy) estimates odds for the active hand.
//!
//! Every command completes synchronously. Transitions are queued as
//! [`PacedEvent`]s carrying a suggested delay, so a presentation layer can
//! animate them while tests drain them instantly.
//!
//! # Example
//!
//! ```no_run
//! use boxjack::{Action, Game, GameOptions, RoundState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.place_bet(1, 50).unwrap();
//! game.start_round().unwrap();
//!
//! while let Some(turn) = game.current_turn() {
//!     game.act(turn.seat, Action::Stand).unwrap();
//! }
//! if game.state() == RoundState::Finished {
//!     println!("bankroll: {}", game.bankroll());
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod seat;
pub mod shoe;
pub mod stats;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{ActionError, BetError, DealError, ErrorKind, InsuranceError, RoundError};
pub use event::{PacedEvent, TableEvent};
pub use game::{Action, Game, InsuranceDecision, InsuranceRecord, RoundState, TurnPosition};
pub use hand::{DealerHand, Hand, HandStatus};
pub use options::{GameOptions, Pacing, RoundingMode};
pub use result::{HandOutcome, HandResult, RoundResult, SeatResult};
pub use seat::{SEAT_COUNT, Seat};
pub use shoe::Shoe;
pub use stats::{Snapshot, Statistics};
pub use strategy::{Advice, Recommendation};
