//! Splitting raw input text into typed tokens

use crate::config::DataType;
use std::fmt;

/// One unit of input. Every token of a run has the same variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
    Integer(i64),
    Line(String),
    Word(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Integer(value) => write!(f, "{value}"),
            Token::Line(text) | Token::Word(text) => f.write_str(text),
        }
    }
}

/// Result of tokenizing a whole input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    /// Tokens in input order
    pub tokens: Vec<Token>,
    /// Pieces that could not be parsed and were dropped
    pub skipped: Vec<String>,
}

/// Split `input` according to `data_type`.
pub fn tokenize(input: &str, data_type: DataType) -> Tokenized {
    match data_type {
        DataType::Long => tokenize_integers(input),
        DataType::Line => Tokenized {
            tokens: input.lines().map(|line| Token::Line(line.to_string())).collect(),
            skipped: Vec::new(),
        },
        DataType::Word => Tokenized {
            tokens: input
                .split_whitespace()
                .map(|word| Token::Word(word.to_string()))
                .collect(),
            skipped: Vec::new(),
        },
    }
}

fn tokenize_integers(input: &str) -> Tokenized {
    let mut result = Tokenized::default();
    for piece in input.split_whitespace() {
        match piece.parse::<i64>() {
            Ok(value) => result.tokens.push(Token::Integer(value)),
            Err(_) => result.skipped.push(piece.to_string()),
        }
    }
    result
}

/// Message reported for a piece dropped in integer mode
pub fn skip_message(piece: &str) -> String {
    format!("\"{piece}\" is not a valid number; it will be skipped")
}
