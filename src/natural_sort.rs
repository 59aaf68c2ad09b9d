//! Natural ordering: every token, ascending, duplicates kept

use crate::tokenizer::Token;

/// Sort tokens by their own ordering (numeric for integers, code point
/// order for text). Equal tokens are interchangeable, so an unstable sort
/// is enough.
pub fn natural_sort(mut tokens: Vec<Token>) -> Vec<Token> {
    tokens.sort_unstable();
    tokens
}
