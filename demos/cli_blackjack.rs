//! CLI blackjack demo: a console [`Table`] driving the engine.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use shoejack::{
    Action, Card, Game, GameOptions, MAX_DECKS, MIN_DECKS, Moment, ParticipantView, Rank,
    Snapshot, Suit, Table,
};

struct Console;

impl Table for Console {
    fn request_deck_count(&mut self) -> u8 {
        loop {
            let input = prompt_line(&format!(
                "Number of decks for this game ({MIN_DECKS}-{MAX_DECKS}): "
            ));
            match input.parse::<u8>() {
                Ok(decks) if (MIN_DECKS..=MAX_DECKS).contains(&decks) => return decks,
                _ => println!("Sorry! Please enter a number {MIN_DECKS}-{MAX_DECKS}."),
            }
        }
    }

    fn request_player_name(&mut self) -> String {
        loop {
            let name = prompt_raw("Please enter your name: ");
            if !name.is_empty() {
                return name;
            }
        }
    }

    fn request_action(&mut self) -> Action {
        loop {
            match prompt_line("(H)it or (S)tay? ").as_str() {
                "h" | "hit" => return Action::Hit,
                "s" | "stay" => return Action::Stay,
                _ => println!("Sorry, please choose (H)it or (S)tay."),
            }
        }
    }

    fn request_continue(&mut self) -> bool {
        matches!(
            prompt_line("Would you like to continue? (y/n) ").as_str(),
            "y" | "yes"
        )
    }

    fn render(&mut self, snapshot: &Snapshot) {
        // The check snapshot only adds news when a natural settled the round.
        if snapshot.moment == Moment::BlackjackChecked && snapshot.outcome.is_none() {
            return;
        }

        println!();
        print_participant(&snapshot.player);
        print_participant(&snapshot.dealer);

        if let (Moment::Resolved, Some(outcome)) = (snapshot.moment, snapshot.outcome) {
            println!("{outcome}\n");
        }
    }

    fn shuffled(&mut self) {
        println!("Shuffling...");
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("*WELCOME TO BLACKJACK!*\n");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut table = Console;
    let mut game = match Game::from_table(&mut table, GameOptions::default(), seed) {
        Ok(game) => game,
        Err(err) => {
            log::error!("could not start game: {err}");
            return ExitCode::FAILURE;
        }
    };

    match game.run(&mut table) {
        Ok(summary) => {
            println!(
                "Thanks for playing! {} round(s): {} won, {} lost, {} tied.",
                summary.rounds, summary.player_wins, summary.dealer_wins, summary.pushes
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("game aborted: {err}");
            ExitCode::FAILURE
        }
    }
}

fn prompt_raw(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    if let Some(answer) = read_answer(&mut io::stdin().lock()) {
        return answer;
    }
    println!("\nGoodbye.");
    std::process::exit(0);
}

/// Reads one trimmed line; `None` once input is closed or unreadable.
fn read_answer(input: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_owned()),
        Err(err) => {
            log::error!("cannot read input: {err}");
            None
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    prompt_raw(prompt).to_lowercase()
}

fn print_participant(view: &ParticipantView) {
    println!("--------------------");
    println!("{}'s hand:", view.name);
    for card in view.shown_cards() {
        println!("  {}", format_card(card));
    }
    if view.hole_concealed && view.cards.len() > 1 {
        println!("  ????????");
    }
    println!("{}: {} points", view.name, view.shown_total());
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };

    let text = card.to_string();
    if matches!(card.rank, Rank::Jack | Rank::Queen | Rank::King | Rank::Ace) {
        colorize(&text, color_code)
    } else {
        text
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
