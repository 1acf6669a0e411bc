//! Factory: the sanctioned construction shapes for tokenizers
//!
//! This module is the single place that wires concrete tokenizer
//! implementations together. It returns boxed `dyn Tokenizer` values so call
//! sites never depend on concrete tokenizer types; there is no algorithmic
//! logic here beyond construction.
//!
//! Pattern arguments are regular expressions. Literal delimiters such as
//! `${` must be escaped by the caller (e.g. with `regex::escape`).

use crate::tokenize::filter::FilterTokenizer;
use crate::tokenize::grouping::GroupingTokenizer;
use crate::tokenize::interface::{ConfigError, Continuation, Tokenizer};
use crate::tokenize::split::SplitTokenizer;
use crate::tokenize::token::TokenKind;

/// Create a split tokenizer that discards matches of `pattern` and emits one
/// plain token per maximal non-empty gap.
pub fn split_tokenizer(pattern: &str, offset: usize) -> Result<Box<dyn Tokenizer>, ConfigError> {
    Ok(Box::new(SplitTokenizer::new(pattern, offset)?))
}

/// Create a grouping tokenizer for the `start_pattern` / `end_pattern`
/// delimiter pair.
pub fn grouping_tokenizer(
    start_pattern: &str,
    end_pattern: &str,
    offset: usize,
) -> Result<Box<dyn Tokenizer>, ConfigError> {
    Ok(Box::new(GroupingTokenizer::new(
        start_pattern,
        end_pattern,
        offset,
    )?))
}

/// Create a grouping tokenizer resumed from a prior continuation state.
///
/// `continuation` is consumed; `offset` must equal the `continue_offset` of
/// the error that produced it, and the text handed to `parse` must be the
/// original input stream from that offset onward.
pub fn resumed_grouping_tokenizer(
    continuation: Continuation,
    start_pattern: &str,
    end_pattern: &str,
    offset: usize,
) -> Result<Box<dyn Tokenizer>, ConfigError> {
    let Continuation::Grouping(state) = continuation;
    Ok(Box::new(GroupingTokenizer::resumed(
        state,
        start_pattern,
        end_pattern,
        offset,
    )?))
}

/// Create a resumed grouping tokenizer whose output is filtered by kind.
///
/// Same resumption contract as [resumed_grouping_tokenizer]; the filter is
/// applied to the combined (resumed) output.
pub fn filtered_resumed_grouping_tokenizer(
    continuation: Continuation,
    accepted: impl IntoIterator<Item = TokenKind>,
    go_into_compounds: bool,
    start_pattern: &str,
    end_pattern: &str,
    offset: usize,
) -> Result<Box<dyn Tokenizer>, ConfigError> {
    let inner = resumed_grouping_tokenizer(continuation, start_pattern, end_pattern, offset)?;
    Ok(Box::new(FilterTokenizer::new(
        inner,
        accepted,
        go_into_compounds,
    )))
}

/// Create a filter over any other tokenizer's output.
pub fn filter_tokenizer(
    inner: Box<dyn Tokenizer>,
    accepted: impl IntoIterator<Item = TokenKind>,
    go_into_compounds: bool,
) -> Box<dyn Tokenizer> {
    Box::new(FilterTokenizer::new(inner, accepted, go_into_compounds))
}
