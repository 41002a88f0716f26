//! CLI blackjack example.
//!
//! Stakes up to six seats, renders the engine's paced events and asks for
//! decisions on the active hand. Set `RUST_LOG=boxjack=debug` to see the
//! engine's own logging, and `FAST=1` to skip the pacing delays.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use boxjack::{
    Action, Card, Game, GameOptions, Hand, HandOutcome, Pacing, RoundState, TableEvent,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let pacing = if std::env::var_os("FAST").is_some() {
        Pacing::instant()
    } else {
        Pacing::standard()
    };
    let mut game = Game::new(GameOptions::default().with_pacing(pacing), seed);

    loop {
        if game.bankroll() == 0 {
            println!("You are out of credits. Game over.");
            break;
        }

        if !take_bets(&mut game) {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = game.start_round() {
            println!("Deal error: {err}");
            continue;
        }
        render_events(&mut game);

        while game.state() != RoundState::Finished {
            if let Some((seat, cost)) = game.insurance_offer() {
                let answer = prompt_line(&format!("Seat {seat}: insurance for {cost}? (y/n): "));
                if let Err(err) = game.decide_insurance(seat, matches!(answer.as_str(), "y" | "yes")) {
                    println!("Insurance error: {err}");
                }
                render_events(&mut game);
                continue;
            }

            let Some(turn) = game.current_turn() else {
                break;
            };
            print_table(&game);
            if let Some(advice) = game.advice() {
                println!(
                    "Advisor: {:?} (bust {}%, win {}%, push {}%)",
                    advice.recommendation, advice.bust, advice.win, advice.push
                );
            }
            println!("{}", format_actions(&game, turn.seat));

            let action = match prompt_line(&format!("Seat {} hand {}: ", turn.seat, turn.hand_index + 1))
                .as_str()
            {
                "h" | "hit" => Action::Hit,
                "s" | "stand" => Action::Stand,
                "d" | "double" => Action::Double,
                "p" | "split" => Action::Split,
                "u" | "surrender" => Action::Surrender,
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = game.act(turn.seat, action) {
                println!("Action error: {err}");
            }
            render_events(&mut game);
        }

        print_summary(&game);
        if let Err(err) = game.advance_round() {
            println!("Round error: {err}");
        }
        game.drain_events();
    }
}

/// Collects stakes for the round. Returns `false` when the user quits.
fn take_bets(game: &mut Game) -> bool {
    loop {
        println!(
            "Bankroll: {} | staked: {} | enter 'seat amount', 'r' to repeat, 'c' to clear, empty to deal",
            game.bankroll(),
            game.total_bet()
        );
        let line = prompt_line("Bet: ");
        let mut parts = line.split_whitespace();
        let result = match (parts.next(), parts.next()) {
            (None, _) if game.total_bet() > 0 => return true,
            (None, _) => {
                println!("Place at least one bet.");
                continue;
            }
            (Some("q" | "quit"), _) => return false,
            (Some("r"), _) => game.repeat_last_bets(),
            (Some("c"), _) => game.clear_all_bets(),
            (Some(seat), Some(amount)) => match (seat.parse::<u8>(), amount.parse::<u64>()) {
                (Ok(seat), Ok(amount)) => game.place_bet(seat, amount).map(|_| ()),
                _ => {
                    println!("Expected two numbers.");
                    continue;
                }
            },
            (Some(_), None) => {
                println!("Expected 'seat amount'.");
                continue;
            }
        };

        if let Err(err) = result {
            println!("Bet error: {err}");
        }
        game.drain_events();
    }
}

fn render_events(game: &mut Game) {
    for paced in game.drain_events() {
        thread::sleep(paced.delay);
        match paced.event {
            TableEvent::ShoeReshuffled => println!("Shoe reshuffled."),
            TableEvent::CardDealt { seat, hand, card } => {
                println!("Seat {seat} hand {} receives {}", hand + 1, format_card(card));
            }
            TableEvent::DealerCard { card } => println!("Dealer draws {}", format_card(card)),
            TableEvent::PlayerBlackjack { seat } => println!("Seat {seat} has blackjack!"),
            TableEvent::InsuranceDecided { seat, taken: true, stake } => {
                println!("Seat {seat} insures for {stake}.");
            }
            TableEvent::HandSettled(result) => {
                println!(
                    "Seat {} hand {}: {} ({} vs {}), net {}",
                    result.seat,
                    result.hand_index + 1,
                    format_outcome(result.outcome),
                    result.player_value,
                    result.dealer_value,
                    result.net
                );
            }
            TableEvent::InsuranceSettled { seat, payout } => {
                println!("Seat {seat} insurance pays {payout}.");
            }
            _ => {}
        }
    }
}

fn print_table(game: &Game) {
    println!();
    println!(
        "Dealer: {} ({})",
        format_cards(game.dealer_hand().cards()),
        game.dealer_hand().value()
    );
    for seat in game.seats().iter().filter(|seat| seat.is_active()) {
        for (index, hand) in seat.hands().iter().enumerate() {
            let marker = if game.current_turn().is_some_and(|turn| {
                turn.seat == seat.number() && turn.hand_index == index
            }) {
                ">"
            } else {
                " "
            };
            println!(
                "{marker} Seat {} hand {}: {} bet {} {:?}",
                seat.number(),
                index + 1,
                format_hand(hand),
                hand.bet(),
                hand.status()
            );
        }
    }
}

fn print_summary(game: &Game) {
    let Some(result) = game.round_result() else {
        return;
    };
    println!();
    println!(
        "Dealer finishes on {}{}",
        result.dealer_value,
        if result.dealer_bust { " (bust)" } else { "" }
    );
    println!("Round net: {} | bankroll: {}", result.net, game.bankroll());

    let stats = game.statistics();
    println!(
        "Rounds {} | hands {} | win rate {:.1}% | net {}",
        stats.rounds_played,
        stats.hands_played,
        stats.win_rate(),
        stats.net_winnings
    );
}

fn format_actions(game: &Game, seat: u8) -> String {
    let labels: Vec<&str> = game
        .available_actions(seat)
        .into_iter()
        .map(|action| match action {
            Action::Hit => "h=hit",
            Action::Stand => "s=stand",
            Action::Double => "d=double",
            Action::Split => "p=split",
            Action::Surrender => "u=surrender",
        })
        .collect();
    format!("Actions: {} q=quit", labels.join(" "))
}

const fn format_outcome(outcome: HandOutcome) -> &'static str {
    match outcome {
        HandOutcome::Win => "win",
        HandOutcome::Lose => "lose",
        HandOutcome::Push => "push",
        HandOutcome::Blackjack => "blackjack",
        HandOutcome::Surrendered => "surrendered",
    }
}

fn format_hand(hand: &Hand) -> String {
    format!("{} ({})", format_cards(hand.cards()), hand.value())
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| format_card(*card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card) -> String {
    format!("{}{}", card.name(), card.suit.symbol())
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return "q".to_owned(),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}
