//! Game integration tests.

use core::time::Duration;

use boxjack::{
    Action, ActionError, BetError, Card, DealError, DealerHand, ErrorKind, Game, GameOptions,
    Hand, HandOutcome, HandStatus, InsuranceDecision, InsuranceError, Pacing, Recommendation,
    RoundError, RoundState, RoundingMode, Suit, TableEvent, TurnPosition,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn stack(game: &mut Game, draws: &[Card]) {
    game.stack_shoe(draws).unwrap();
}

fn turn(seat: u8, hand_index: usize) -> Option<TurnPosition> {
    Some(TurnPosition { seat, hand_index })
}

#[test]
fn hand_blackjack_and_split_behavior() {
    let mut hand = Hand::new(10);
    hand.add_card(card(Suit::Hearts, 1));
    hand.add_card(card(Suit::Spades, 13));
    assert_eq!(hand.value(), 21);
    assert_eq!(hand.status(), HandStatus::Blackjack);
    assert!(hand.is_soft());
    assert_eq!(hand.cards()[0].high_value(), 11);
    assert_eq!(hand.cards()[1].high_value(), 10);

    let mut split_hand = Hand::from_split(card(Suit::Hearts, 1), 10);
    split_hand.add_card(card(Suit::Clubs, 13));
    assert_eq!(split_hand.value(), 21);
    assert!(!split_hand.is_blackjack());
    assert_eq!(split_hand.status(), HandStatus::Active);

    let mut bust_hand = Hand::new(5);
    bust_hand.add_card(card(Suit::Hearts, 10));
    bust_hand.add_card(card(Suit::Spades, 10));
    bust_hand.add_card(card(Suit::Diamonds, 2));
    assert_eq!(bust_hand.status(), HandStatus::Bust);
}

#[test]
fn aces_demote_one_at_a_time() {
    let mut hand = Hand::new(10);
    hand.add_card(card(Suit::Hearts, 1));
    hand.add_card(card(Suit::Spades, 1));
    assert_eq!(hand.value(), 12);
    assert!(hand.is_soft());
    assert!(hand.can_split());

    hand.add_card(card(Suit::Clubs, 9));
    assert_eq!(hand.value(), 21);
    assert!(hand.is_soft());

    hand.add_card(card(Suit::Clubs, 5));
    assert_eq!(hand.value(), 16);
    assert!(!hand.is_soft());
}

#[test]
fn split_flag_compares_blackjack_values() {
    let mut hand = Hand::new(10);
    hand.add_card(card(Suit::Hearts, 10));
    hand.add_card(card(Suit::Spades, 13));
    assert!(hand.can_split());
    assert!(hand.can_double());
}

#[test]
fn dealer_hand_values() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Suit::Hearts, 1));
    assert!(dealer.shows_ace());
    assert_eq!(dealer.value(), 11);
    assert!(!dealer.is_blackjack());

    dealer.add_card(card(Suit::Clubs, 6));
    assert_eq!(dealer.value(), 17);
    assert!(dealer.is_soft());
    assert!(!dealer.is_blackjack());

    let mut natural = DealerHand::new();
    natural.add_card(card(Suit::Hearts, 1));
    natural.add_card(card(Suit::Clubs, 12));
    assert!(natural.is_blackjack());
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_decks(4)
        .with_reshuffle_threshold(30)
        .with_starting_bankroll(500)
        .with_max_hands_per_seat(4)
        .with_rounding_blackjack(RoundingMode::Up)
        .with_rounding_surrender(RoundingMode::Nearest)
        .with_pacing(Pacing::instant());

    assert_eq!(options.decks, 4);
    assert_eq!(options.reshuffle_threshold, 30);
    assert_eq!(options.starting_bankroll, 500);
    assert_eq!(options.max_hands_per_seat, 4);
    assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    assert_eq!(options.rounding_surrender, RoundingMode::Nearest);
    assert_eq!(options.pacing.dealer_draw, Duration::ZERO);

    let defaults = GameOptions::default();
    assert_eq!(defaults.decks, 6);
    assert_eq!(defaults.reshuffle_threshold, 20);
    assert_eq!(defaults.starting_bankroll, 1000);
    assert_eq!(defaults.max_hands_per_seat, 3);
}

#[test]
fn bet_errors() {
    let mut game = Game::new(GameOptions::default(), 1);

    assert_eq!(game.place_bet(1, 0).unwrap_err(), BetError::ZeroBet);
    assert_eq!(game.place_bet(0, 5).unwrap_err(), BetError::SeatNotFound);
    assert_eq!(game.place_bet(7, 5).unwrap_err(), BetError::SeatNotFound);
    assert_eq!(
        game.place_bet(1, 1001).unwrap_err(),
        BetError::InsufficientFunds
    );

    game.place_bet(1, 600).unwrap();
    assert_eq!(
        game.place_bet(2, 500).unwrap_err(),
        BetError::InsufficientFunds
    );
    assert_eq!(game.total_bet(), 600);

    stack(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // seat 1
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Diamonds, 7), // seat 1
        ],
    );
    game.start_round().unwrap();
    assert_eq!(game.state(), RoundState::Playing);

    let err = game.place_bet(1, 5).unwrap_err();
    assert_eq!(err, BetError::InvalidState);
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert_eq!(game.place_bet(1, 0).unwrap_err(), BetError::InvalidState);
    assert_eq!(game.clear_bet(1).unwrap_err(), BetError::InvalidState);
}

#[test]
fn bets_stack_and_clear() {
    let mut game = Game::new(GameOptions::default(), 2);

    assert_eq!(game.place_bet(1, 25), Ok(25));
    assert_eq!(game.place_bet(1, 25), Ok(50));
    assert_eq!(game.place_bet(3, 10), Ok(10));
    assert_eq!(game.total_bet(), 60);
    assert_eq!(game.bankroll(), 1000);

    game.clear_bet(1).unwrap();
    assert_eq!(game.seat(1).unwrap().bet(), 0);
    assert_eq!(game.total_bet(), 10);

    game.clear_all_bets().unwrap();
    assert_eq!(game.total_bet(), 0);
}

#[test]
fn deal_errors() {
    let mut game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.start_round().unwrap_err(), DealError::NoBets);

    game.place_bet(2, 10).unwrap();
    stack(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 8),
        ],
    );
    game.start_round().unwrap();
    assert_eq!(game.start_round().unwrap_err(), DealError::InvalidState);

    let remaining = game.cards_remaining();
    assert_eq!(
        game.stack_shoe(&[card(Suit::Spades, 1)]).unwrap_err(),
        RoundError::InvalidState
    );
    assert_eq!(game.cards_remaining(), remaining);
}

#[test]
fn basic_round_flow() {
    let mut game = Game::new(GameOptions::default(), 42);
    game.place_bet(1, 10).unwrap();

    stack(
        &mut game,
        &[
            card(Suit::Hearts, 8),   // seat 1
            card(Suit::Clubs, 6),    // dealer up
            card(Suit::Diamonds, 7), // seat 1
            card(Suit::Hearts, 4),   // seat 1 hit
            card(Suit::Spades, 10),  // dealer draw
            card(Suit::Clubs, 5),    // dealer draw
        ],
    );

    game.start_round().unwrap();
    assert_eq!(game.state(), RoundState::Playing);
    assert_eq!(game.bankroll(), 990);
    assert_eq!(game.dealer_hand().len(), 1);
    assert_eq!(game.current_turn(), turn(1, 0));

    game.act(1, Action::Hit).unwrap();
    assert_eq!(game.current_hand().unwrap().value(), 19);

    game.act(1, Action::Stand).unwrap();
    assert_eq!(game.state(), RoundState::Finished);
    assert_eq!(game.current_turn(), None);

    let result = game.round_result().unwrap();
    assert_eq!(result.dealer_value, 21);
    assert!(!result.dealer_blackjack);
    assert_eq!(result.seats.len(), 1);
    assert_eq!(result.seats[0].hands[0].outcome, HandOutcome::Lose);
    assert_eq!(result.net, -10);
    assert_eq!(game.bankroll(), 990);

    let stats = game.statistics();
    assert_eq!(stats.rounds_played, 1);
    assert_eq!(stats.hands_played, 1);
    assert_eq!(stats.losses, 1);
    assert_eq!(stats.busts, 0);
    assert_eq!(stats.net_winnings, -10);
    assert_eq!(stats.biggest_loss, 10);
}

#[test]
fn opening_deal_follows_no_hole_card_order() {
    let mut game = Game::new(GameOptions::default(), 3);
    game.place_bet(1, 10).unwrap();
    game.place_bet(3, 10).unwrap();
    game.drain_events();

    let draws = [
        card(Suit::Hearts, 10),  // seat 1
        card(Suit::Clubs, 9),    // seat 3
        card(Suit::Diamonds, 7), // dealer up
        card(Suit::Spades, 6),   // seat 1
        card(Suit::Diamonds, 9), // seat 3
    ];
    stack(&mut game, &draws);
    game.start_round().unwrap();

    assert_eq!(game.dealer_hand().cards(), &draws[2..3]);
    assert_eq!(
        game.seat(1).unwrap().hands()[0].cards(),
        &[draws[0], draws[3]]
    );
    assert_eq!(
        game.seat(3).unwrap().hands()[0].cards(),
        &[draws[1], draws[4]]
    );
    assert!(!game.seat(2).unwrap().is_active());
    assert_eq!(game.current_turn(), turn(1, 0));

    let dealt: Vec<(Option<u8>, Card)> = game
        .drain_events()
        .into_iter()
        .filter_map(|paced| match paced.event {
            TableEvent::CardDealt { seat, card, .. } => Some((Some(seat), card)),
            TableEvent::DealerCard { card } => Some((None, card)),
            _ => None,
        })
        .collect();
    assert_eq!(
        dealt,
        vec![
            (Some(1), draws[0]),
            (Some(3), draws[1]),
            (None, draws[2]),
            (Some(1), draws[3]),
            (Some(3), draws[4]),
        ]
    );

    assert_eq!(
        game.act(3, Action::Stand).unwrap_err(),
        ActionError::NotYourTurn
    );
    game.act(1, Action::Stand).unwrap();
    assert_eq!(game.current_turn(), turn(3, 0));
}

#[test]
fn blackjack_pays_three_to_two() {
    let mut game = Game::new(GameOptions::default(), 9);
    game.place_bet(1, 100).unwrap();

    stack(
        &mut game,
        &[
            card(Suit::Spades, 1),   // seat 1
            card(Suit::Hearts, 9),   // dealer up
            card(Suit::Clubs, 13),   // seat 1
            card(Suit::Diamonds, 8), // dealer draw
        ],
    );
    game.start_round().unwrap();

    assert_eq!(game.state(), RoundState::Finished);
    let hand = &game.round_result().unwrap().seats[0].hands[0];
    assert_eq!(hand.outcome, HandOutcome::Blackjack);
    assert_eq!(hand.payout, 250);
    assert_eq!(hand.net, 150);
    assert_eq!(game.bankroll(), 1150);
    assert_eq!(game.statistics().blackjacks, 1);
    assert_eq!(game.statistics().wins, 1);

    assert!(
        game.drain_events()
            .iter()
            .any(|paced| paced.event == TableEvent::PlayerBlackjack { seat: 1 })
    );
}

#[test]
fn blackjack_rounding_is_configurable() {
    let options = GameOptions::default().with_rounding_blackjack(RoundingMode::Up);
    let mut game = Game::new(options, 9);
    game.place_bet(1, 5).unwrap();

    stack(
        &mut game,
        &[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 11),
            card(Suit::Diamonds, 8),
        ],
    );
    game.start_round().unwrap();

    assert_eq!(game.round_result().unwrap().seats[0].hands[0].payout, 13);
    assert_eq!(game.bankroll(), 1008);
}

#[test]
fn split_eights_deals_one_card_to_each_hand() {
    let mut game = Game::new(GameOptions::default(), 11);
    game.place_bet(1, 100).unwrap();

    stack(
        &mut game,
        &[
            card(Suit::Hearts, 8),   // seat 1
            card(Suit::Clubs, 6),    // dealer up
            card(Suit::Diamonds, 8), // seat 1
            card(Suit::Spades, 3),   // first split hand
            card(Suit::Hearts, 10),  // second split hand
            card(Suit::Clubs, 10),   // dealer draw
            card(Suit::Spades, 9),   // dealer draw
        ],
    );
    game.start_round().unwrap();
    assert_eq!(game.bankroll(), 900);

    game.act(1, Action::Split).unwrap();
    assert_eq!(game.bankroll(), 800);

    let hands = game.seat(1).unwrap().hands();
    assert_eq!(hands.len(), 2);
    assert_eq!(
        hands[0].cards(),
        &[card(Suit::Hearts, 8), card(Suit::Spades, 3)]
    );
    assert_eq!(
        hands[1].cards(),
        &[card(Suit::Diamonds, 8), card(Suit::Hearts, 10)]
    );
    assert!(hands.iter().all(Hand::is_from_split));
    assert!(hands.iter().all(|hand| hand.bet() == 100));
    assert_eq!(game.current_turn(), turn(1, 0));

    game.act(1, Action::Stand).unwrap();
    assert_eq!(game.current_turn(), turn(1, 1));
    game.act(1, Action::Stand).unwrap();

    let result = game.round_result().unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.seats[0].total_payout, 400);
    assert_eq!(game.bankroll(), 1200);
    assert_eq!(game.statistics().splits, 1);
    assert_eq!(game.statistics().wins, 2);
}

#[test]
fn split_aces_receive_one_card_each() {
    let mut game = Game::new(GameOptions::default(), 12);
    game.place_bet(1, 10).unwrap();

    stack(
        &mut game,
        &[
            card(Suit::Hearts, 1),    // seat 1
            card(Suit::Clubs, 7),     // dealer up
            card(Suit::Diamonds, 1),  // seat 1
            card(Suit::Spades, 5),    // first split hand
            card(Suit::Clubs, 13),    // second split hand
            card(Suit::Diamonds, 10), // dealer draw
        ],
    );
    game.start_round().unwrap();
    game.act(1, Action::Split).unwrap();

    assert_eq!(game.state(), RoundState::Finished);
    let seat = &game.round_result().unwrap().seats[0];
    assert_eq!(seat.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(seat.hands[1].outcome, HandOutcome::Win);
    assert_eq!(seat.hands[1].payout, 20);
    assert_eq!(game.bankroll(), 1000);
}

#[test]
fn split_limited_to_three_hands() {
    let mut game = Game::new(GameOptions::default(), 13);
    game.place_bet(1, 10).unwrap();

    stack(
        &mut game,
        &[
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 8),
            card(Suit::Spades, 8), // first hand after split
            card(Suit::Clubs, 8),  // second hand after split
            card(Suit::Hearts, 2), // first hand after resplit
            card(Suit::Hearts, 3), // new hand after resplit
        ],
    );
    game.start_round().unwrap();
    game.act(1, Action::Split).unwrap();
    game.act(1, Action::Split).unwrap();
    assert_eq!(game.bankroll(), 970);

    let hands = game.seat(1).unwrap().hands();
    assert_eq!(hands.len(), 3);
    assert_eq!(hands[0].value(), 10);
    assert_eq!(hands[1].value(), 11);
    assert_eq!(hands[2].value(), 16);

    game.act(1, Action::Stand).unwrap();
    game.act(1, Action::Stand).unwrap();
    assert_eq!(game.current_turn(), turn(1, 2));
    assert_eq!(
        game.act(1, Action::Split).unwrap_err(),
        ActionError::MaxHandsReached
    );
    assert_eq!(game.seat(1).unwrap().hands().len(), 3);
    assert_eq!(game.bankroll(), 970);
}

#[test]
fn double_down_updates_bet() {
    let mut game = Game::new(GameOptions::default(), 5);
    game.place_bet(1, 10).unwrap();

    stack(
        &mut game,
        &[
            card(Suit::Hearts, 5),   // seat 1
            card(Suit::Clubs, 2),    // dealer up
            card(Suit::Diamonds, 6), // seat 1
            card(Suit::Hearts, 10),  // double draw
            card(Suit::Spades, 10),  // dealer draw
            card(Suit::Clubs, 5),    // dealer draw
        ],
    );
    game.start_round().unwrap();
    game.act(1, Action::Double).unwrap();

    assert_eq!(game.state(), RoundState::Finished);
    let hand = &game.seat(1).unwrap().hands()[0];
    assert_eq!(hand.bet(), 20);
    assert!(hand.is_doubled());
    assert_eq!(hand.len(), 3);
    assert_eq!(game.round_result().unwrap().seats[0].hands[0].payout, 40);
    assert_eq!(game.bankroll(), 1020);
    assert_eq!(game.statistics().doubles, 1);
}

#[test]
fn double_rejected_after_hit() {
    let mut game = Game::new(GameOptions::default(), 6);
    game.place_bet(1, 10).unwrap();

    stack(
        &mut game,
        &[
            card(Suit::Hearts, 5),
            card(Suit::Clubs, 7),
            card(Suit::Diamonds, 2),
            card(Suit::Spades, 3),
        ],
    );
    game.start_round().unwrap();
    game.act(1, Action::Hit).unwrap();

    let err = game.act(1, Action::Double).unwrap_err();
    assert_eq!(err, ActionError::CannotDouble);
    assert_eq!(err.kind(), ErrorKind::IllegalAction);
    assert_eq!(game.current_hand().unwrap().len(), 3);
}

#[test]
fn rejected_actions_leave_table_untouched() {
    let options = GameOptions::default().with_starting_bankroll(10);
    let mut game = Game::new(options, 7);
    game.place_bet(1, 10).unwrap();

    stack(
        &mut game,
        &[
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 7),
            card(Suit::Diamonds, 8),
        ],
    );
    game.start_round().unwrap();
    assert_eq!(game.bankroll(), 0);
    let remaining = game.cards_remaining();

    let err = game.act(1, Action::Double).unwrap_err();
    assert_eq!(err, ActionError::InsufficientFunds);
    assert_eq!(err.kind(), ErrorKind::InsufficientFunds);
    assert_eq!(
        game.act(1, Action::Split).unwrap_err(),
        ActionError::InsufficientFunds
    );
    assert_eq!(game.act(0, Action::Hit).unwrap_err(), ActionError::SeatNotFound);

    assert_eq!(game.state(), RoundState::Playing);
    assert_eq!(game.cards_remaining(), remaining);
    assert_eq!(game.seat(1).unwrap().hands().len(), 1);
    assert_eq!(game.current_hand().unwrap().len(), 2);
    assert_eq!(
        game.available_actions(1),
        vec![Action::Hit, Action::Stand, Action::Surrender]
    );
}

#[test]
fn reaching_twenty_one_keeps_hand_open() {
    let mut game = Game::new(GameOptions::default(), 8);
    game.place_bet(1, 10).unwrap();

    stack(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 7),
            card(Suit::Diamonds, 6),
            card(Suit::Spades, 5),
        ],
    );
    game.start_round().unwrap();
    game.act(1, Action::Hit).unwrap();

    assert_eq!(game.current_hand().unwrap().value(), 21);
    assert_eq!(game.current_turn(), turn(1, 0));
    assert_eq!(game.state(), RoundState::Playing);
}

#[test]
fn bust_moves_to_next_seat() {
    let mut game = Game::new(GameOptions::default(), 8);
    game.place_bet(1, 10).unwrap();
    game.place_bet(2, 10).unwrap();

    stack(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // seat 1
            card(Suit::Hearts, 9),   // seat 2
            card(Suit::Clubs, 7),    // dealer up
            card(Suit::Diamonds, 6), // seat 1
            card(Suit::Spades, 9),   // seat 2
            card(Suit::Spades, 12),  // seat 1 hit
        ],
    );
    game.start_round().unwrap();
    game.act(1, Action::Hit).unwrap();

    assert_eq!(
        game.seat(1).unwrap().hands()[0].status(),
        HandStatus::Bust
    );
    assert!(game.seat(1).unwrap().is_finished());
    assert_eq!(game.current_turn(), turn(2, 0));
}

#[test]
fn surrender_refunds_half_bet() {
    let mut game = Game::new(GameOptions::default(), 21);
    game.place_bet(1, 10).unwrap();

    stack(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // seat 1
            card(Suit::Clubs, 7),    // dealer up
            card(Suit::Diamonds, 6), // seat 1
            card(Suit::Spades, 10),  // dealer draw
        ],
    );
    game.start_round().unwrap();
    game.act(1, Action::Surrender).unwrap();

    assert_eq!(game.state(), RoundState::Finished);
    let hand = &game.round_result().unwrap().seats[0].hands[0];
    assert_eq!(hand.outcome, HandOutcome::Surrendered);
    assert_eq!(hand.payout, 0);
    assert_eq!(hand.net, -5);
    assert_eq!(game.bankroll(), 995);
    assert_eq!(game.statistics().surrenders, 1);
}

#[test]
fn surrender_not_allowed_after_split() {
    let mut game = Game::new(GameOptions::default(), 22);
    game.place_bet(1, 10).unwrap();

    stack(
        &mut game,
        &[
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 8),
            card(Suit::Spades, 9),
            card(Suit::Clubs, 9),
        ],
    );
    game.start_round().unwrap();
    assert!(game.check_action(1, Action::Surrender).is_ok());

    game.act(1, Action::Split).unwrap();
    assert_eq!(
        game.act(1, Action::Surrender).unwrap_err(),
        ActionError::CannotSurrender
    );
}

#[test]
fn insurance_pays_two_to_one_on_dealer_natural() {
    let mut game = Game::new(GameOptions::default(), 99);
    game.place_bet(1, 50).unwrap();

    stack(
        &mut game,
        &[
            card(Suit::Hearts, 10),  // seat 1
            card(Suit::Spades, 1),   // dealer up
            card(Suit::Diamonds, 9), // seat 1
            card(Suit::Clubs, 13),   // dealer draw
        ],
    );
    game.start_round().unwrap();
    assert_eq!(game.state(), RoundState::Insurance);
    assert_eq!(game.insurance_offer(), Some((1, 25)));

    assert_eq!(game.decide_insurance(1, true), Ok(25));
    assert_eq!(game.bankroll(), 925);
    assert_eq!(game.state(), RoundState::Playing);
    assert_eq!(
        game.act(1, Action::Surrender).unwrap_err(),
        ActionError::CannotSurrender
    );

    game.act(1, Action::Stand).unwrap();
    let result = game.round_result().unwrap();
    assert!(result.dealer_blackjack);
    assert_eq!(result.seats[0].insurance_bet, 25);
    assert_eq!(result.seats[0].insurance_payout, 50);
    assert_eq!(result.seats[0].hands[0].outcome, HandOutcome::Lose);
    assert_eq!(game.bankroll(), 975);
    assert_eq!(game.statistics().insurances_taken, 1);
}

#[test]
fn insurance_offered_one_seat_at_a_time() {
    let mut game = Game::new(GameOptions::default(), 77);
    game.place_bet(2, 20).unwrap();
    game.place_bet(5, 20).unwrap();

    stack(
        &mut game,
        &[
            card(Suit::Hearts, 10), // seat 2
            card(Suit::Clubs, 10),  // seat 5
            card(Suit::Spades, 1),  // dealer up
            card(Suit::Diamonds, 7), // seat 2
            card(Suit::Spades, 8),  // seat 5
            card(Suit::Hearts, 7),  // dealer draw
        ],
    );
    game.start_round().unwrap();
    assert_eq!(game.insurance_offer(), Some((2, 10)));
    assert_eq!(
        game.decide_insurance(5, true).unwrap_err(),
        InsuranceError::NotOffered
    );

    assert_eq!(game.decide_insurance(2, false), Ok(0));
    assert_eq!(game.state(), RoundState::Insurance);
    assert_eq!(game.insurance_offer(), Some((5, 10)));
    assert_eq!(
        game.insurance(2).unwrap().decision,
        InsuranceDecision::Declined
    );

    game.decide_insurance(5, true).unwrap();
    assert_eq!(game.state(), RoundState::Playing);
    assert_eq!(game.insurance_offer(), None);
    assert_eq!(game.current_turn(), turn(2, 0));

    game.act(2, Action::Stand).unwrap();
    game.act(5, Action::Stand).unwrap();

    let result = game.round_result().unwrap();
    assert_eq!(result.dealer_value, 18);
    assert_eq!(result.seats[0].hands[0].outcome, HandOutcome::Lose);
    assert_eq!(result.seats[1].hands[0].outcome, HandOutcome::Push);
    assert_eq!(result.seats[1].insurance_payout, 0);
    assert_eq!(result.seats[1].net, -10);
    assert_eq!(result.net, -30);
    assert_eq!(game.bankroll(), 970);
}

#[test]
fn insurance_requires_funds() {
    let options = GameOptions::default().with_starting_bankroll(60);
    let mut game = Game::new(options, 78);
    game.place_bet(1, 60).unwrap();

    stack(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Spades, 1),
            card(Suit::Diamonds, 9),
        ],
    );
    game.start_round().unwrap();

    let err = game.decide_insurance(1, true).unwrap_err();
    assert_eq!(err, InsuranceError::InsufficientFunds);
    assert_eq!(err.kind(), ErrorKind::InsufficientFunds);
    assert_eq!(game.state(), RoundState::Insurance);

    game.decide_insurance(1, false).unwrap();
    assert_eq!(game.state(), RoundState::Playing);
}

#[test]
fn insurance_on_unit_stake_costs_nothing_and_is_not_taken() {
    let mut game = Game::new(GameOptions::default(), 79);
    game.place_bet(1, 1).unwrap();

    stack(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Spades, 1),
            card(Suit::Diamonds, 9),
        ],
    );
    game.start_round().unwrap();
    assert_eq!(game.insurance_offer(), Some((1, 0)));

    assert_eq!(game.decide_insurance(1, true), Ok(0));
    let record = game.insurance(1).unwrap();
    assert_eq!(record.decision, InsuranceDecision::Declined);
    assert_eq!(record.bet, 0);
    assert_eq!(game.statistics().insurances_taken, 0);
    assert_eq!(game.bankroll(), 999);
    assert_eq!(game.state(), RoundState::Playing);
}

#[test]
fn insurance_rejects_wrong_state() {
    let mut game = Game::new(GameOptions::default(), 1);
    assert_eq!(
        game.decide_insurance(1, true).unwrap_err(),
        InsuranceError::InvalidState
    );
    assert_eq!(game.insurance_offer(), None);
}

#[test]
fn player_natural_pushes_dealer_natural() {
    let mut game = Game::new(GameOptions::default(), 31);
    game.place_bet(1, 100).unwrap();

    stack(
        &mut game,
        &[
            card(Suit::Hearts, 1),   // seat 1
            card(Suit::Spades, 1),   // dealer up
            card(Suit::Diamonds, 13), // seat 1
            card(Suit::Clubs, 13),   // dealer draw
        ],
    );
    game.start_round().unwrap();
    game.decide_insurance(1, false).unwrap();

    assert_eq!(game.state(), RoundState::Finished);
    let result = game.round_result().unwrap();
    assert!(result.dealer_blackjack);
    assert_eq!(result.seats[0].hands[0].outcome, HandOutcome::Push);
    assert_eq!(game.bankroll(), 1000);
}

#[test]
fn advance_round_is_idempotent() {
    let mut game = Game::new(GameOptions::default(), 40);
    game.place_bet(1, 10).unwrap();
    game.place_bet(4, 20).unwrap();

    stack(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 8),
            card(Suit::Diamonds, 8),
            card(Suit::Spades, 9),
        ],
    );
    game.start_round().unwrap();
    assert_eq!(game.advance_round().unwrap_err(), RoundError::InvalidState);

    game.act(1, Action::Stand).unwrap();
    game.act(4, Action::Stand).unwrap();
    assert_eq!(game.state(), RoundState::Finished);
    let bankroll = game.bankroll();

    game.advance_round().unwrap();
    assert_eq!(game.state(), RoundState::Betting);
    assert_eq!(game.bankroll(), bankroll);
    assert_eq!(game.total_bet(), 0);
    assert!(game.dealer_hand().is_empty());
    assert!(game.round_result().is_none());
    assert!(game.seats().iter().all(|seat| seat.hands().is_empty()));

    game.advance_round().unwrap();
    assert_eq!(game.bankroll(), bankroll);
    assert_eq!(game.statistics().rounds_played, 1);
    assert_eq!(game.last_bets(), &[10, 0, 0, 20, 0, 0]);
}

#[test]
fn repeat_last_bets_restores_stakes() {
    let mut game = Game::new(GameOptions::default(), 41);
    assert_eq!(
        game.repeat_last_bets().unwrap_err(),
        BetError::NoPreviousBets
    );

    game.place_bet(1, 10).unwrap();
    game.place_bet(4, 20).unwrap();
    stack(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 8),
            card(Suit::Diamonds, 8),
            card(Suit::Spades, 9),
        ],
    );
    game.start_round().unwrap();
    game.act(1, Action::Stand).unwrap();
    game.act(4, Action::Stand).unwrap();
    game.advance_round().unwrap();

    game.place_bet(2, 5).unwrap();
    game.repeat_last_bets().unwrap();
    assert_eq!(game.seat(1).unwrap().bet(), 10);
    assert_eq!(game.seat(2).unwrap().bet(), 0);
    assert_eq!(game.seat(4).unwrap().bet(), 20);
    assert_eq!(game.total_bet(), 30);
}

#[test]
fn maintenance_requires_idle_table() {
    let mut game = Game::new(GameOptions::default(), 50);
    game.place_bet(1, 10).unwrap();
    assert_eq!(game.reset_bankroll().unwrap_err(), RoundError::InvalidState);
    assert_eq!(
        game.reset_statistics().unwrap_err(),
        RoundError::InvalidState
    );

    game.clear_bet(1).unwrap();
    game.reset_bankroll().unwrap();
    game.reset_statistics().unwrap();
    assert_eq!(game.bankroll(), 1000);
    assert_eq!(game.statistics().rounds_played, 0);
}

#[test]
fn snapshot_restores_bankroll_and_statistics() {
    let mut game = Game::new(GameOptions::default(), 9);
    game.place_bet(1, 100).unwrap();
    stack(
        &mut game,
        &[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 13),
            card(Suit::Diamonds, 8),
        ],
    );
    game.start_round().unwrap();
    game.advance_round().unwrap();

    let snapshot = game.snapshot();
    let restored = Game::from_snapshot(GameOptions::default(), 1, snapshot);
    assert_eq!(restored.bankroll(), 1150);
    assert_eq!(restored.statistics(), game.statistics());
    assert_eq!(restored.snapshot(), snapshot);
    assert_eq!(restored.state(), RoundState::Betting);
}

#[test]
fn advice_follows_active_hand() {
    let mut game = Game::new(GameOptions::default(), 60);
    game.place_bet(1, 10).unwrap();
    stack(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 6),
            card(Suit::Diamonds, 7),
        ],
    );
    assert!(game.advice().is_none());

    game.start_round().unwrap();
    let advice = game.advice().unwrap();
    assert_eq!(advice.recommendation, Recommendation::Stand);
    assert_eq!(game.advice_for(1), Some(advice));
    assert_eq!(game.advice_for(2), None);
    assert_eq!(game.cards_in_play(), 3);
}

#[test]
fn pacing_delays_travel_with_events() {
    let mut game = Game::new(GameOptions::default(), 61);
    game.place_bet(1, 10).unwrap();
    stack(
        &mut game,
        &[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 6),
            card(Suit::Diamonds, 7),
        ],
    );
    game.start_round().unwrap();

    let deal = Pacing::standard().deal;
    let events = game.drain_events();
    assert!(
        events
            .iter()
            .filter(|paced| matches!(paced.event, TableEvent::CardDealt { .. }))
            .all(|paced| paced.delay == deal)
    );
    assert!(game.drain_events().is_empty());

    let mut instant = Game::new(GameOptions::default().with_pacing(Pacing::instant()), 61);
    instant.place_bet(1, 10).unwrap();
    instant.start_round().unwrap();
    assert!(
        instant
            .drain_events()
            .iter()
            .all(|paced| paced.delay == Duration::ZERO)
    );
}
