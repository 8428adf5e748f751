//! Rendering of run outputs to stdout.

use std::io::{self, Write};

use algotrace_board::{Board, Cell, ConflictLine};
use algotrace_engines::{RunOutput, RunResult};
use algotrace_trace::TraceStep;
use serde::Serialize;

use crate::cli::OutputFormat;

/// JSON document printed for a run.
#[derive(Serialize)]
struct RunDocument<'a> {
    #[serde(flatten)]
    output: &'a RunOutput,
    digest: String,
}

/// Print a run in the requested format.
pub fn print_run(
    out: &mut impl Write,
    output: &RunOutput,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let digest = output.digest()?.to_hex();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &RunDocument { output, digest })?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for step in output.steps.iter() {
                writeln!(out, "#{:<4} {:<8} {}", step.seq(), step.action_name(), step.message())?;
            }
            writeln!(out)?;
            write_result(out, &output.result)?;
            writeln!(out, "steps:  {}", output.steps.len())?;
            writeln!(out, "digest: {digest}")?;
        }
    }
    Ok(())
}

fn write_result(out: &mut impl Write, result: &RunResult) -> io::Result<()> {
    match result {
        RunResult::Index(Some(index)) => writeln!(out, "result: found at index {index}"),
        RunResult::Index(None) => writeln!(out, "result: not found"),
        RunResult::Sorted(values) => writeln!(out, "result: {values:?}"),
        RunResult::Solutions(boards) => {
            writeln!(out, "result: {} solution(s)", boards.len())?;
            if let Some(first) = boards.first() {
                writeln!(out, "{first}")?;
            }
            Ok(())
        }
    }
}

/// Outcome of one manual placement.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Placement {
    Placed { cell: Cell },
    Conflict { line: ConflictLine },
    Rejected { cell: Cell, reason: String },
}

/// Construct-mode report.
#[derive(Debug, Serialize)]
pub struct ConstructReport {
    pub placements: Vec<Placement>,
    pub board: Board,
    pub solved: bool,
}

pub fn print_construct(
    out: &mut impl Write,
    report: &ConstructReport,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for placement in &report.placements {
                match placement {
                    Placement::Placed { cell } => writeln!(out, "placed   {cell}")?,
                    Placement::Conflict { line } => {
                        let cells: Vec<String> = line.cells.iter().map(Cell::to_string).collect();
                        writeln!(
                            out,
                            "conflict {} attacked by {} along {:?}: {}",
                            line.candidate,
                            line.queen,
                            line.kind,
                            cells.join(" ")
                        )?;
                    }
                    Placement::Rejected { cell, reason } => writeln!(out, "rejected {cell}: {reason}")?,
                }
            }
            writeln!(out)?;
            writeln!(out, "{}", report.board)?;
            writeln!(out, "solved: {}", report.solved)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use algotrace_engines::{RunRequest, Runner};

    fn render(output: &RunOutput, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        print_run(&mut buf, output, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn json_document_has_steps_result_and_digest() {
        let output = Runner::default()
            .run(&RunRequest::LinearSearch {
                array: vec![15, 7, 23, 9, 42, 18, 31],
                target: 42,
            })
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&render(&output, OutputFormat::Json)).unwrap();

        assert_eq!(json["result"], 4);
        assert_eq!(json["steps"].as_array().unwrap().len(), 5);
        assert_eq!(json["steps"][4]["found"], true);
        assert_eq!(json["digest"].as_str().unwrap().len(), 64);
    }

    #[test]
    fn text_lists_one_line_per_step() {
        let output = Runner::default()
            .run(&RunRequest::BubbleSort {
                array: vec![2, 1],
            })
            .unwrap();
        let text = render(&output, OutputFormat::Text);
        assert!(text.starts_with("#0    swap"));
        assert!(text.contains("result: [1, 2]"));
        assert!(text.contains("steps:  1"));
    }
}
