//! Grouping of distinct tokens by how often they occur

use crate::tokenizer::Token;
use itertools::Itertools;
use std::collections::BTreeMap;

/// Distinct tokens keyed by occurrence count, counts ascending and each
/// group sorted ascending. Every distinct token lives in exactly one group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyGrouping {
    groups: BTreeMap<usize, Vec<Token>>,
}

impl FrequencyGrouping {
    /// Count every token in one pass, then invert the counts into groups.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let counts = tokens.iter().counts();

        let mut groups: BTreeMap<usize, Vec<Token>> = BTreeMap::new();
        for (token, count) in counts {
            groups.entry(count).or_default().push(token.clone());
        }
        for group in groups.values_mut() {
            group.sort_unstable();
        }

        Self { groups }
    }

    /// Groups in ascending count order
    pub fn groups(&self) -> impl Iterator<Item = (usize, &[Token])> {
        self.groups
            .iter()
            .map(|(count, tokens)| (*count, tokens.as_slice()))
    }

    /// `(token, count)` pairs in report order
    pub fn entries(&self) -> impl Iterator<Item = (&Token, usize)> {
        self.groups()
            .flat_map(|(count, tokens)| tokens.iter().map(move |token| (token, count)))
    }

    /// Number of tokens the grouping was built from
    pub fn total(&self) -> usize {
        self.groups
            .iter()
            .map(|(count, tokens)| count * tokens.len())
            .sum()
    }

    /// Number of distinct tokens
    pub fn distinct(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
