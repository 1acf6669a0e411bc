//! Split tokenizer: delimiter-based segmentation into plain tokens
//!
//! The split tokenizer's job is to remove separators: every maximal non-empty
//! span of text between (or before/after) delimiter matches becomes one plain
//! token, and the delimiter matches themselves are discarded. Contrast with
//! the grouping tokenizer, which emits its delimiters as part of the group
//! token.
//!
//! This tokenizer never fails at parse time: delimiter absence simply yields
//! one token for the whole input, and it has no continuation semantics
//! because re-splitting is always possible.

use regex::Regex;

use crate::tokenize::interface::{compile_pattern, ConfigError, ParseError, Tokenizer};
use crate::tokenize::token::Token;

/// Tokenizer that splits text on a delimiter pattern.
pub struct SplitTokenizer {
    pattern: Regex,
    offset: usize,
}

impl SplitTokenizer {
    /// Create a split tokenizer from a delimiter pattern.
    ///
    /// # Arguments
    /// * `pattern` - Regular expression matching the delimiters to discard
    /// * `offset` - Added to all reported positions, so a sub-tokenizer can
    ///   tokenize a substring while reporting document-relative positions
    pub fn new(pattern: &str, offset: usize) -> Result<SplitTokenizer, ConfigError> {
        Ok(SplitTokenizer::from_regex(compile_pattern(pattern)?, offset))
    }

    /// Create a split tokenizer from a precompiled delimiter pattern.
    pub fn from_regex(pattern: Regex, offset: usize) -> SplitTokenizer {
        SplitTokenizer { pattern, offset }
    }
}

impl Tokenizer for SplitTokenizer {
    fn name(&self) -> &'static str {
        "split"
    }

    fn parse(&self, text: &str) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        let mut gap = 0usize;

        for m in self.pattern.find_iter(text) {
            if m.start() > gap {
                tokens.push(Token::simple(
                    self.offset + gap,
                    self.offset + m.start(),
                    &text[gap..m.start()],
                ));
            }
            gap = m.end();
        }
        if text.len() > gap {
            tokens.push(Token::simple(
                self.offset + gap,
                self.offset + text.len(),
                &text[gap..],
            ));
        }

        Ok(tokens)
    }
}
