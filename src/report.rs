//! Report rendering and the sink it is written through

use crate::config::DataType;
use crate::error::SortResult;
use crate::frequency_sort::FrequencyGrouping;
use crate::tokenizer::Token;
use itertools::Itertools;
use std::io::Write;

/// Destination for report lines
pub trait ReportSink {
    /// Write one line of the report
    fn write_line(&mut self, line: &str) -> SortResult<()>;

    /// Flush anything still buffered
    fn finish(&mut self) -> SortResult<()> {
        Ok(())
    }
}

/// Sink backed by any `Write`, one `\n`-terminated line per call
pub struct LineWriter<W: Write> {
    inner: W,
}

impl<W: Write> LineWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> ReportSink for LineWriter<W> {
    fn write_line(&mut self, line: &str) -> SortResult<()> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> SortResult<()> {
        self.inner.flush()?;
        Ok(())
    }
}

/// Finished report text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Emit every line through `sink`
    pub fn write_to(&self, sink: &mut dyn ReportSink) -> SortResult<()> {
        for line in &self.lines {
            sink.write_line(line)?;
        }
        Ok(())
    }
}

fn header(data_type: DataType, total: usize) -> String {
    format!("Total {}: {}.", data_type.noun(), total)
}

/// Share of `count` in `total` as a truncated integer percentage; 0 when
/// there is nothing to divide by.
pub fn percentage(count: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    count.saturating_mul(100) / total
}

/// Render every sorted token. Lines get one output line each, numbers and
/// words share a single space-separated line.
pub fn natural_report(data_type: DataType, sorted: &[Token]) -> Report {
    let mut lines = vec![header(data_type, sorted.len())];
    match data_type {
        DataType::Line => {
            lines.push("Sorted data:".to_string());
            lines.extend(sorted.iter().map(Token::to_string));
        }
        DataType::Long | DataType::Word => {
            lines.push(format!("Sorted data: {}", sorted.iter().join(" ")));
        }
    }
    Report { lines }
}

/// Render one `<value>: <count> time(s), <pct>%` line per distinct token
pub fn frequency_report(data_type: DataType, grouping: &FrequencyGrouping) -> Report {
    let total = grouping.total();
    let mut lines = vec![header(data_type, total)];
    lines.extend(grouping.entries().map(|(token, count)| {
        format!(
            "{}: {} time(s), {}%",
            token,
            count,
            percentage(count, total)
        )
    }));
    Report { lines }
}
