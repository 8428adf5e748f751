//! Algotrace binary
//!
//! Runs one engine per invocation and prints the result with its full step
//! trace. Logs go to stderr, traces to stdout.

mod cli;
mod output;

use std::fs;
use std::io::{self, Read};

use algotrace_board::{ConstructBoard, PlacementError};
use algotrace_engines::{EngineConfig, Error, RunRequest, Runner, SolveMode, TraceDetail};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};
use crate::output::{ConstructReport, Placement};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "algotrace=info,algotrace_engines=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = engine_config(&cli)?;
    tracing::debug!(?config, "Loaded configuration");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let request = match cli.command {
        Command::Construct { n, placements } => {
            let report = construct(n, &placements, &config)?;
            return output::print_construct(&mut out, &report, cli.format);
        }
        Command::Search { target, values } => RunRequest::LinearSearch {
            array: values,
            target,
        },
        Command::Sort { values } => RunRequest::BubbleSort { array: values },
        Command::Queens { n, all, .. } => RunRequest::NQueens {
            n,
            mode: if all { SolveMode::All } else { SolveMode::First },
        },
        Command::Run { input } => read_request(&input)?,
    };

    let run = Runner::new(config).run(&request)?;
    output::print_run(&mut out, &run, cli.format)?;

    Ok(())
}

/// Environment configuration with command-line overrides applied.
fn engine_config(cli: &Cli) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    let mut config = EngineConfig::from_env()?;
    if let Some(max) = cli.max_queens {
        config.max_queens = max;
    }
    if cli.strict {
        config.strict_inputs = true;
    }
    if let Command::Queens { detailed: true, .. } = cli.command {
        config.queens_detail = TraceDetail::Detailed;
    }
    Ok(config)
}

fn read_request(path: &std::path::Path) -> Result<RunRequest, Box<dyn std::error::Error>> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&raw)?)
}

/// Apply manual placements in order, collecting one outcome per placement.
///
/// The board size obeys the same limits as the N-Queens engine.
fn construct(
    n: usize,
    placements: &[algotrace_board::Cell],
    config: &EngineConfig,
) -> Result<ConstructReport, Error> {
    if n == 0 {
        tracing::warn!("Rejecting construct board of size 0");
        return Err(Error::InvalidBoardSize { n });
    }
    if n > config.max_queens {
        tracing::warn!(n, max = config.max_queens, "Rejecting oversized construct board");
        return Err(Error::BoardTooLarge {
            n,
            max: config.max_queens,
        });
    }

    let mut board = ConstructBoard::new(n)?;
    let outcomes: Vec<Placement> = placements
        .iter()
        .map(|&cell| match board.try_place(cell) {
            Ok(()) => Placement::Placed { cell },
            Err(PlacementError::Conflict(line)) => {
                tracing::debug!(%cell, queen = %line.queen, "Placement conflicts");
                Placement::Conflict { line }
            }
            Err(err @ PlacementError::OutOfRange(_)) => Placement::Rejected {
                cell,
                reason: err.to_string(),
            },
        })
        .collect();

    Ok(ConstructReport {
        placements: outcomes,
        solved: board.is_solved(),
        board: board.board().clone(),
    })
}
