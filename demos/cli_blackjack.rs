//! CLI blackjack example.
//!
//! Set `RUST_LOG=bjtable=debug` to see the engine's log on stderr.

use std::io::{self, Write};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{Action, Game, GameOptions, GameState, Money, RoundResult};
use tracing_subscriber::EnvFilter;

const FAREWELL: &str = "THE DEALER HAS RUN OUT OF CARDS, THANKS FOR PLAYING!";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let max_players = options.max_players;
    let mut game = Game::new(options, seed);

    loop {
        let Some(count) = prompt_number::<usize>(&format!("How many players (1-{max_players})? ")) else {
            return;
        };
        match game.seat_players(count) {
            Ok(()) => break,
            Err(err) => println!("{err}"),
        }
    }

    while !game.is_over() {
        if game.start_betting().is_err() {
            break;
        }
        if !take_bets(&mut game) {
            return;
        }

        if let Err(err) = game.deal() {
            if err.is_fatal() {
                println!("{FAREWELL}");
                return;
            }
            println!("{err}");
            continue;
        }

        for player in game.table() {
            if let Some(outcome) = player.last_action() {
                println!("{outcome}");
            }
        }

        while let Some(index) = game.current_player().map(|player| player.index()) {
            print_table(&game);

            let input = prompt_line(&format!(
                "Player #{index}: [H]it [S]tand [D]ouble down [X] surrender [I]nsure [A]ce to 11 [L]eave: "
            ));
            if input == "q" || input == "quit" {
                return;
            }
            let Some(code) = input.chars().next() else {
                continue;
            };

            match game.act(index, Action::from_code(code)) {
                Ok(outcome) => println!("{outcome}"),
                Err(err) if err.is_fatal() => {
                    println!("{FAREWELL}");
                    return;
                }
                Err(err) => println!("{err}"),
            }
        }

        if game.state() == GameState::DealerTurn {
            match game.dealer_play() {
                Ok(drawn) => {
                    if !drawn.is_empty() {
                        println!("Dealer draws {} card(s).", drawn.len());
                    }
                }
                Err(err) => {
                    if err.is_fatal() {
                        println!("{FAREWELL}");
                    } else {
                        println!("{err}");
                    }
                    return;
                }
            }
        }

        print_table(&game);

        match game.showdown() {
            Ok(result) => print_results(&result),
            Err(err) => {
                println!("{err}");
                return;
            }
        }

        match game.cleanup() {
            Ok(report) => {
                for index in &report.left {
                    println!("PLAYER #{index} HAS LEFT THE TABLE");
                }
                for index in &report.broke {
                    println!("PLAYER #{index} CAN NO LONGER AFFORD THE MINIMUM BET AND LEAVES");
                }
            }
            Err(err) => {
                println!("{err}");
                return;
            }
        }
    }

    println!("Everyone has left the table. Goodbye.");
}

/// Asks every seated player for a bet until it is accepted.
///
/// Returns `false` if the user quits.
fn take_bets(game: &mut Game) -> bool {
    let players: Vec<(usize, Money)> = game
        .table()
        .iter()
        .map(|player| (player.index(), player.cash()))
        .collect();
    let min_bet = game.options().min_bet;

    for (index, cash) in players {
        loop {
            let prompt = format!("Player #{index}, you have {cash}$. Bet ({min_bet}-{cash}): ");
            let Some(amount) = prompt_number::<u64>(&prompt) else {
                return false;
            };
            match game.bet(index, amount) {
                Ok(()) => break,
                Err(err) => println!("{err}"),
            }
        }
    }
    true
}

fn print_table(game: &Game) {
    println!("\n{}\n\n{}\n", game.dealer(), game.table());
}

fn print_results(result: &RoundResult) {
    println!("Dealer finished with {}.", result.dealer_value);
    for player in &result.players {
        println!("{player}");
    }
    println!();
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        // End of input quits like 'q'.
        Ok(0) | Err(_) => return "q".to_string(),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}

fn prompt_number<T: FromStr>(prompt: &str) -> Option<T> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<T>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}
