//! Interactive Rock-Paper-Scissors against the predictive opponent.
//!
//! Type ROCK, PAPER or SCISSORS (any case) each round, STOP to end the
//! session and print the statistics.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::debug;

use rps_markov::games::rps::Choice;
use rps_markov::markov::{ChoiceDomain, OpponentConfig, Outcome, PredictiveOpponent};

const STOP: &str = "STOP";

#[derive(Parser, Debug)]
#[command(name = "play")]
#[command(about = "Play Rock-Paper-Scissors against an opponent that learns your habits", long_about = None)]
struct Args {
    /// Seed the computer's random choices for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    /// Load opponent settings from a JSON file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the opponent's prediction and transition counts after each round.
    #[arg(long)]
    show_model: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => OpponentConfig::from_json_file(path)?,
        None => OpponentConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut opponent = PredictiveOpponent::<Choice>::new(config)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("Please choose either ROCK, PAPER or SCISSORS: ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        if input.eq_ignore_ascii_case(STOP) {
            break;
        }

        let player = match Choice::parse(input) {
            Ok(choice) => choice,
            Err(e) => {
                debug!("{}", e);
                println!("Invalid choice");
                print!("Please choose either ROCK, PAPER or SCISSORS: ");
                stdout.flush()?;
                continue;
            }
        };

        let computer = opponent.choose_move();
        let outcome = opponent.play_round(computer, player);

        println!("Computer choice : {}", computer);
        match outcome {
            Outcome::PlayerWins => println!("You win!\n"),
            Outcome::Tie => println!("Tie!\n"),
            Outcome::ComputerWins => println!("You lose!\n"),
        }

        if args.show_model {
            print_model(&opponent);
        }

        print!("Please choose your next throw: ");
        stdout.flush()?;
    }

    println!("\n");
    println!("Stats of the games played");
    println!("{}", opponent.summary());

    Ok(())
}

fn print_model(opponent: &PredictiveOpponent<Choice>) {
    match opponent.last_prediction() {
        Some(predicted) => println!("  Predicted your throw: {}", predicted),
        None => println!("  Predicted your throw: (random opening)"),
    }

    let snapshot = opponent.table().snapshot();
    println!("  {:>10} {}", "prev\\next", snapshot.choices.iter().map(|c| format!("{:>9}", c)).collect::<String>());
    for (name, row) in snapshot.choices.iter().zip(snapshot.counts.iter()) {
        let cells: String = row.iter().map(|c| format!("{:>9}", c)).collect();
        println!("  {:>10} {}", name, cells);
    }
    println!("  Rounds played: {}\n", opponent.rounds_played());
}
