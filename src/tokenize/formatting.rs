//! Detokenizer for token streams
//!
//! This module provides functionality to convert a sequence of tokens back
//! into a string. This is useful for:
//!
//! - Round-trip testing (source -> tokens -> source)
//! - Debugging and visualization of token streams
//!
//! Note that tokenizers drop text: the split tokenizer discards delimiter
//! matches, and the grouping tokenizer does not cover gaps that were empty.
//! Detokenization therefore reproduces the input exactly only for token
//! streams that cover it without gaps (e.g. grouping output, which keeps
//! both the text between groups and the group delimiters).

use crate::tokenize::token::Token;

/// Trait for converting a token to its string representation
pub trait ToSourceString {
    fn to_source_string(&self) -> String;
}

impl ToSourceString for Token {
    fn to_source_string(&self) -> String {
        self.text()
    }
}

/// Convert a token sequence back into a string by concatenating the covered
/// text of each token in order.
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(Token::text).collect()
}
