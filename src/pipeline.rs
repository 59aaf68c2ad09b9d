//! Driver tying the tokenize, sort and report stages together

use crate::config::SortConfig;
use crate::error::SortResult;
use crate::frequency_sort::FrequencyGrouping;
use crate::natural_sort::natural_sort;
use crate::report::{frequency_report, natural_report, Report, ReportSink};
use crate::tokenizer::{skip_message, tokenize};
use log::debug;
use std::io::{Read, Write};
use std::time::Instant;

/// Tokenize, sort and report one input according to a resolved config
pub struct Pipeline {
    config: SortConfig,
}

impl Pipeline {
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    /// Read `input` to the end and decode it. Nothing is tokenized until the
    /// whole input is in memory.
    pub fn read_input(mut input: impl Read) -> SortResult<String> {
        let start = Instant::now();
        let mut buffer = Vec::new();
        input.read_to_end(&mut buffer)?;
        let text = String::from_utf8(buffer)?;
        debug!("read {} bytes in {:.2?}", text.len(), start.elapsed());
        Ok(text)
    }

    /// Build the report for `text` and write it through `sink`.
    /// Skipped-token messages go to `diagnostics`, never into the report.
    pub fn write_report(
        &self,
        text: &str,
        sink: &mut dyn ReportSink,
        diagnostics: &mut dyn Write,
    ) -> SortResult<()> {
        let start = Instant::now();
        let report = self.build_report(text, diagnostics)?;

        report.write_to(sink)?;
        sink.finish()?;
        debug!(
            "wrote {} report lines, total {:.2?}",
            report.lines().len(),
            start.elapsed()
        );
        Ok(())
    }

    /// Produce the report for already-decoded input text
    pub fn build_report(&self, text: &str, diagnostics: &mut dyn Write) -> SortResult<Report> {
        let data_type = self.config.data_type;
        let tokenized = tokenize(text, data_type);
        for piece in &tokenized.skipped {
            writeln!(diagnostics, "{}", skip_message(piece))?;
        }
        debug!(
            "{} {} tokens, {} skipped",
            tokenized.tokens.len(),
            data_type,
            tokenized.skipped.len()
        );

        let report = if self.config.by_count() {
            let grouping = FrequencyGrouping::from_tokens(&tokenized.tokens);
            debug!("{} distinct values", grouping.distinct());
            frequency_report(data_type, &grouping)
        } else {
            natural_report(data_type, &natural_sort(tokenized.tokens))
        };
        Ok(report)
    }
}
