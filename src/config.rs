//! Configuration management for sort runs

use crate::error::{SortError, SortResult};
use std::str::FromStr;

/// Kind of token the input is split into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataType {
    /// Whitespace-separated signed integers
    Long,
    /// Whole input lines
    Line,
    /// Whitespace-separated words
    #[default]
    Word,
}

impl DataType {
    /// Plural noun used in the report header
    pub fn noun(&self) -> &'static str {
        match self {
            DataType::Long => "numbers",
            DataType::Line => "lines",
            DataType::Word => "words",
        }
    }
}

impl FromStr for DataType {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long" => Ok(DataType::Long),
            "line" => Ok(DataType::Line),
            "word" => Ok(DataType::Word),
            _ => Err(SortError::MissingDataType),
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DataType::Long => "long",
            DataType::Line => "line",
            DataType::Word => "word",
        };
        write!(f, "{name}")
    }
}

/// How the tokens are ordered in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortingType {
    /// Every token, ascending by its own ordering
    #[default]
    Natural,
    /// Distinct tokens grouped by ascending occurrence count
    ByCount,
}

impl FromStr for SortingType {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "natural" => Ok(SortingType::Natural),
            "byCount" => Ok(SortingType::ByCount),
            _ => Err(SortError::MissingSortingType),
        }
    }
}

impl std::fmt::Display for SortingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortingType::Natural => "natural",
            SortingType::ByCount => "byCount",
        };
        write!(f, "{name}")
    }
}

/// Main configuration structure for a sort run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortConfig {
    /// Token kind
    pub data_type: DataType,
    /// Ordering strategy
    pub sorting_type: SortingType,
    /// File to read from (stdin when absent)
    pub input_file: Option<String>,
    /// File to append the report to (stdout when absent)
    pub output_file: Option<String>,
    /// Debug logging on stderr
    pub debug: bool,
}

impl SortConfig {
    /// Resolve a selector given on the command line.
    ///
    /// `None` means the selector was not supplied and the default applies;
    /// `Some(None)` means it was supplied without a value, which is fatal.
    pub fn resolve_selector<T>(raw: Option<Option<&str>>) -> SortResult<T>
    where
        T: FromStr<Err = SortError> + Default,
    {
        match raw {
            None => Ok(T::default()),
            Some(value) => value.unwrap_or_default().parse(),
        }
    }

    /// Check if reading from stdin
    pub fn reading_from_stdin(&self) -> bool {
        matches!(self.input_file.as_deref(), None | Some("-"))
    }

    /// Check if writing to stdout
    pub fn writing_to_stdout(&self) -> bool {
        matches!(self.output_file.as_deref(), None | Some("-"))
    }

    /// True when the report is grouped by occurrence count
    pub fn by_count(&self) -> bool {
        self.sorting_type == SortingType::ByCount
    }
}

/// Builder pattern for creating configurations
pub struct SortConfigBuilder {
    config: SortConfig,
}

impl SortConfigBuilder {
    /// Start building a new configuration
    pub fn new() -> Self {
        Self {
            config: SortConfig::default(),
        }
    }

    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.config.data_type = data_type;
        self
    }

    pub fn sorting_type(mut self, sorting_type: SortingType) -> Self {
        self.config.sorting_type = sorting_type;
        self
    }

    pub fn input_file(mut self, file: String) -> Self {
        self.config.input_file = Some(file);
        self
    }

    pub fn output_file(mut self, file: String) -> Self {
        self.config.output_file = Some(file);
        self
    }

    pub fn debug(mut self) -> Self {
        self.config.debug = true;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> SortConfig {
        self.config
    }
}

impl Default for SortConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
