//! Tokenizer contract: the `Tokenizer` trait and its error types
//!
//! This module defines the single entry point consumers call
//! (`Tokenizer::parse`), the resumable `ParseError` it can fail with, and the
//! `ConfigError` raised at construction time for invalid delimiter patterns.
//!
//! Design principles:
//! - Tokenizers are pure: same input (plus continuation state) always
//!   produces the same output
//! - Tokenizers never swallow errors and never retry internally; resumption
//!   is always an explicit, caller-driven second call
//! - Each tokenizer kind owns its continuation payload shape; the
//!   `Continuation` enum tags the payload with the kind that produced it

use std::fmt;

use crate::tokenize::token::Token;

/// Trait for tokenizer implementations.
///
/// A tokenizer is a pure function from text to an ordered token sequence.
/// Token positions are absolute: a tokenizer constructed with an offset
/// reports positions relative to the enclosing input stream, not to the
/// chunk it was handed.
pub trait Tokenizer {
    /// Return the name of this tokenizer implementation
    fn name(&self) -> &'static str;

    /// Tokenize text into an ordered, non-overlapping token sequence
    ///
    /// # Arguments
    /// * `text` - The text to tokenize
    ///
    /// # Returns
    /// The token sequence, or a `ParseError` which is continuable when more
    /// input could resolve it (see [`ParseError::is_continuable`]).
    fn parse(&self, text: &str) -> Result<Vec<Token>, ParseError>;
}

/// In-progress state of a grouping tokenizer at the point its input ran out.
///
/// `pending_start` is the start-delimiter token of the group left open;
/// `prefix` holds the tokens emitted before that group was opened. A resumed
/// tokenizer seeds itself with both, so the combined output equals one-pass
/// tokenization of the concatenated input.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GroupingState {
    pub pending_start: Token,
    pub prefix: Vec<Token>,
}

/// Continuation payloads, tagged by the tokenizer kind that produced them.
///
/// A continuation is meaningful only to its own tokenizer kind and must be
/// passed back unmodified. The resuming factory constructors take it by
/// value, so a consumed continuation cannot be reused.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Continuation {
    /// Grouping tokenizer stopped with a group still open.
    Grouping(GroupingState),
}

/// Error produced by a failed `parse` call.
///
/// `continue_state` is `None` for fatal errors (malformed delimiter nesting,
/// stray close) and `Some` for continuable ones (input ended mid-group).
/// For continuable errors, `continue_offset` is the absolute offset in the
/// original input stream at which the next chunk should conceptually begin.
/// `error_state` carries the in-progress parse state at the failure point,
/// when there was one.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseError {
    pub message: String,
    pub error_offset: usize,
    pub error_state: Option<Continuation>,
    pub continue_offset: usize,
    pub continue_state: Option<Continuation>,
}

impl ParseError {
    /// Create a fatal error with no recoverable state.
    pub fn fatal(message: impl Into<String>, error_offset: usize) -> ParseError {
        ParseError {
            message: message.into(),
            error_offset,
            error_state: None,
            continue_offset: error_offset,
            continue_state: None,
        }
    }

    /// Create a fatal error that still reports the parse state at failure.
    pub fn fatal_with_state(
        message: impl Into<String>,
        error_offset: usize,
        error_state: Continuation,
    ) -> ParseError {
        ParseError {
            message: message.into(),
            error_offset,
            error_state: Some(error_state),
            continue_offset: error_offset,
            continue_state: None,
        }
    }

    /// Create a continuable error. The caller can resume at
    /// `continue_offset` with a tokenizer seeded from `state`.
    pub fn continuable(
        message: impl Into<String>,
        error_offset: usize,
        continue_offset: usize,
        state: Continuation,
    ) -> ParseError {
        ParseError {
            message: message.into(),
            error_offset,
            error_state: Some(state.clone()),
            continue_offset,
            continue_state: Some(state),
        }
    }

    /// A parse error is continuable iff more input could resolve it.
    pub fn is_continuable(&self) -> bool {
        self.continue_state.is_some()
    }

    /// Take the continuation state out of this error, consuming it.
    pub fn into_continuation(self) -> Option<Continuation> {
        self.continue_state
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_continuable() {
            write!(
                f,
                "{} at offset {} (continuable at offset {})",
                self.message, self.error_offset, self.continue_offset
            )
        } else {
            write!(f, "{} at offset {}", self.message, self.error_offset)
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors raised at tokenizer construction time.
///
/// These are distinct from parse errors: an invalid delimiter pattern is a
/// configuration mistake and is always fatal.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// A delimiter pattern failed to compile.
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPattern { pattern, source } => {
                write!(f, "Invalid delimiter pattern {:?}: {}", pattern, source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPattern { source, .. } => Some(source),
        }
    }
}

/// Compile a delimiter pattern, mapping failure to a `ConfigError`.
pub(crate) fn compile_pattern(pattern: &str) -> Result<regex::Regex, ConfigError> {
    regex::Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
