use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use itertools::Itertools;
use missionaries::{PuzzleBuilder, PuzzleSize, Shore, Solution, Solver, StateGraph};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Find a shortest way to ferry everybody across without any missionary being outnumbered
#[derive(Parser)]
#[command(name = "solver", version, about, long_about = None)]
struct Cli {
    /// Total missionaries
    #[arg(short, long, default_value_t = 3)]
    missionaries: usize,

    /// Total cannibals
    #[arg(short, long, default_value_t = 3)]
    cannibals: usize,

    /// Seats in the boat
    #[arg(short = 'b', long, default_value_t = 2)]
    capacity: usize,

    /// Missionaries starting on the left shore (default: all of them)
    #[arg(long)]
    left_missionaries: Option<usize>,

    /// Cannibals starting on the left shore (default: all of them)
    #[arg(long)]
    left_cannibals: Option<usize>,

    /// Shore the boat starts on
    #[arg(long, value_enum, default_value = "left")]
    boat: BoatSide,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Also report the size of the reachable state space
    #[arg(long)]
    explore: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum BoatSide {
    Left,
    Right,
}

impl From<BoatSide> for Shore {
    fn from(value: BoatSide) -> Self {
        match value {
            BoatSide::Left => Shore::Left,
            BoatSide::Right => Shore::Right,
        }
    }
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// One line per state
    #[default]
    Text,
    /// JSON for programmatic use
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    size: PuzzleSize,
    reachable_states: Option<usize>,
    solution: &'a Solution,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })))
        .init();

    let size = PuzzleSize::new(cli.missionaries, cli.cannibals, cli.capacity);
    let mut builder = PuzzleBuilder::with_size(size);
    builder
        .left_shore(cli.left_missionaries.unwrap_or(size.missionaries), cli.left_cannibals.unwrap_or(size.cannibals))
        .boat(cli.boat.into());

    let start = match builder.build() {
        Ok(start) => start,
        Err(reasons) => {
            error!(?reasons, "invalid puzzle");
            eprintln!("invalid puzzle: {}", reasons.iter().join(", "));
            return ExitCode::from(1);
        }
    };

    info!(%start, "solving");
    let reachable_states = cli.explore.then(|| StateGraph::explore(&start).len());
    let solution = Solver::from(&start).solve_from_state(&start);

    match cli.format {
        OutputFormat::Text => {
            if let Some(reachable) = reachable_states {
                println!("{reachable} reachable states");
            }
            if solution.is_empty() {
                println!("no solution");
            } else {
                print!("{solution}");
                println!("{} crossings", solution.crossings());
            }
        }
        OutputFormat::Json => {
            let report = Report { size, reachable_states, solution: &solution };
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    error!(error = %e, "could not serialize the report");
                    return ExitCode::from(1);
                }
            }
        }
    }

    if solution.is_empty() {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}
