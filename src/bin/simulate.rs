//! Offline evaluation of the predictive opponent.
//!
//! Plays many seeded sessions against scripted players in parallel and
//! prints how often the computer wins.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use rps_markov::games::rps::players::{simulate, SimulationReport, Strategy};
use rps_markov::games::rps::Choice;
use rps_markov::markov::OpponentConfig;

#[derive(Parser, Debug)]
#[command(name = "simulate")]
#[command(about = "Evaluate the predictive opponent against scripted players", long_about = None)]
struct Args {
    /// Player strategies to test (default: all).
    #[arg(short, long, value_delimiter = ',')]
    strategy: Vec<Strategy>,

    /// Independent sessions per strategy.
    #[arg(long, default_value_t = 1000)]
    sessions: u64,

    /// Rounds per session.
    #[arg(long, default_value_t = 100)]
    rounds: u64,

    /// Seed of the first session.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Load opponent settings from a JSON file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the reports as JSON.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => OpponentConfig::from_json_file(path)?,
        None => OpponentConfig::default(),
    };
    let strategies = if args.strategy.is_empty() {
        Strategy::ALL.to_vec()
    } else {
        args.strategy.clone()
    };

    println!("=== Predictive Opponent Simulation ===\n");
    println!(
        "Sessions: {} | Rounds per session: {} | Base seed: {}",
        args.sessions, args.rounds, args.seed
    );
    println!();

    let start = Instant::now();
    let mut reports: Vec<SimulationReport> = Vec::new();

    for strategy in strategies {
        let pb = ProgressBar::new(args.sessions);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg:>10} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
                .progress_chars("=> "),
        );
        pb.set_message(strategy.to_string());

        let report = simulate::<Choice, _>(
            strategy,
            &config,
            args.sessions,
            args.rounds,
            args.seed,
            || pb.inc(1),
        )?;
        pb.finish_and_clear();

        info!("{} finished: {:?}", strategy, report.tally);
        println!("--- vs {} ---", strategy);
        println!("{}\n", report.summary);
        reports.push(report);
    }

    println!("Total time: {:.2}s", start.elapsed().as_secs_f64());

    if let Some(path) = &args.output {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &reports)?;
        println!("Saved JSON: {}", path.display());
    }

    Ok(())
}
