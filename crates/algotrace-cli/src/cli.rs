//! Command-line argument definitions.

use std::path::PathBuf;

use algotrace_board::Cell;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "algotrace",
    version,
    about = "Run search, sort and N-Queens engines and print their step traces"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format for traces.
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Largest N-Queens board accepted (overrides ALGOTRACE_MAX_QUEENS).
    #[arg(long = "max-queens", value_name = "N", global = true)]
    pub max_queens: Option<usize>,

    /// Reject empty arrays instead of returning an empty trace.
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Linear search for a target value.
    Search {
        /// Value to look for.
        #[arg(long, allow_negative_numbers = true)]
        target: i64,

        /// Values to scan, in order.
        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Bubble sort a list of values.
    Sort {
        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Solve N-Queens by backtracking.
    Queens {
        /// Board size.
        n: usize,

        /// Enumerate every solution instead of stopping at the first.
        #[arg(long)]
        all: bool,

        /// Record a try and a check step for every candidate cell.
        #[arg(long)]
        detailed: bool,
    },

    /// Place queens by hand and report the first conflict for each.
    Construct {
        /// Board size.
        n: usize,

        /// Placements as ROW:COL, applied in order.
        #[arg(value_name = "ROW:COL", value_parser = parse_cell)]
        placements: Vec<Cell>,
    },

    /// Run a JSON request read from a file, or stdin with "-".
    Run {
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per step plus a summary
    Text,
    /// A single JSON document
    Json,
}

/// Parse `ROW:COL` into a cell.
fn parse_cell(raw: &str) -> Result<Cell, String> {
    let (row, col) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected ROW:COL, got '{raw}'"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("invalid row '{row}': {e}"))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("invalid column '{col}': {e}"))?;
    Ok(Cell::new(row, col))
}
