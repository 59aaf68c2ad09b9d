//! Sort numbers, lines or words and report them
//!
//! Input is read to the end, split into tokens of one kind, ordered either
//! naturally or by occurrence count, and rendered as a short text report.

#![warn(clippy::all)]

pub mod error;
pub mod config;
pub mod args;
pub mod logger;

pub mod tokenizer;
pub mod natural_sort;
pub mod frequency_sort;
pub mod report;
pub mod pipeline;

// Re-export commonly used types
pub use error::{SortError, SortResult};
pub use config::{DataType, SortConfig, SortingType};
pub use pipeline::Pipeline;

use error::SortContext;
use report::LineWriter;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const SORT_FAILURE: i32 = 2;

/// Read the configured input, then open the output and write the report.
/// The output file is only created once the input has been read and
/// decoded; every handle is dropped, and so closed, on every path.
pub fn run(config: &SortConfig) -> SortResult<i32> {
    let text = match config.input_file.as_deref() {
        Some(path) if !config.reading_from_stdin() => Pipeline::read_input(BufReader::new(
            File::open(path).with_file_context(path)?,
        ))?,
        _ => Pipeline::read_input(io::stdin().lock())?,
    };

    let output: Box<dyn Write> = match config.output_file.as_deref() {
        Some(path) if !config.writing_to_stdout() => Box::new(BufWriter::new(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_file_context(path)?,
        )),
        _ => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut sink = LineWriter::new(output);
    let mut diagnostics = io::stderr().lock();
    Pipeline::new(config.clone()).write_report(&text, &mut sink, &mut diagnostics)?;
    Ok(EXIT_SUCCESS)
}
