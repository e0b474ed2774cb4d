//! mixtrace — turns a mixer trace log into a CSV event table.
//!
//! Reads trace lines, keeps the ones describing input arrivals and output
//! intervals, and writes them as rows in the order they were logged. The
//! building blocks live in [`mixtrace_core`]; this crate wires them to a
//! reader and a writer.
//!
//! # Architecture
//!
//! ```text
//! stdin ──► Ingestor ──► Timeline ──► Export ──► stdout
//! ```

use std::io::{BufRead, Write};

pub use mixtrace_core::{
    Classifier, Config, Error, Event, EventKind, Result, Rule, Summary, Timeline,
};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub summary: Summary,
    /// Event rows written, not counting the header.
    pub rows_written: usize,
    /// The reader of the output went away before the table was complete.
    pub output_closed: bool,
}

/// Classify all of `input`, then write the table to `output`.
///
/// Nothing is written if ingestion fails. A closed output pipe ends the run
/// early but is not an error.
pub fn run<R: BufRead, W: Write>(input: R, output: W, config: &Config) -> Result<Outcome> {
    config.validate()?;

    let classifier = Classifier::builtin();
    let mut timeline = Timeline::new();
    let summary = mixtrace_core::ingest::ingest(input, &classifier, &mut timeline, &config.input)?;

    tracing::info!(
        lines = summary.lines_read,
        matched = summary.lines_matched,
        input_found = summary.input_found,
        output_begin = summary.output_begin,
        output_end = summary.output_end,
        "classified trace"
    );

    match mixtrace_core::export::write_table(&timeline, output, &config.output) {
        Ok(rows_written) => Ok(Outcome {
            summary,
            rows_written,
            output_closed: false,
        }),
        Err(err) if err.is_broken_pipe() => {
            tracing::debug!("output closed before the table was complete");
            Ok(Outcome {
                summary,
                rows_written: 0,
                output_closed: true,
            })
        }
        Err(err) => Err(err),
    }
}
