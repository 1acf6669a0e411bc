//! Token model for the tokenizer family
//!
//! This module defines the closed set of token variants produced by the
//! tokenizers: plain spans, zero-width empty markers, and three-part group
//! tokens. Tokens are immutable value types; equality and hashing are
//! structural, never based on identity.
//!
//! Positions are absolute byte offsets into the tokenized input stream. A
//! tokenizer constructed with a non-zero offset reports positions relative to
//! the enclosing document, which is what makes sub-tokenization and resumption
//! across chunk boundaries composable.

use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

use once_cell::sync::Lazy;

/// Variant tags for tokens, used by the filter tokenizer's accepted-kind set.
///
/// Matching on kinds replaces runtime type introspection: a filter declares
/// the kinds it keeps and checks each token with a plain equality test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TokenKind {
    Simple,
    Empty,
    Group,
}

/// A positioned, immutable unit of recognized text.
///
/// Every token covers the half-open byte range `[start, end)` of the
/// tokenized input. For leaf tokens the covered text is stored directly; for
/// group tokens the span and text are implied by the three parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Token {
    /// Leaf token covering a non-empty span of source text.
    Simple {
        start: usize,
        end: usize,
        text: String,
    },
    /// Zero-width leaf token marking "no content" at a position.
    Empty { position: usize },
    /// Compound token for a delimiter-bounded region. The parts are, in
    /// source order: start delimiter, content (simple or empty), end
    /// delimiter. Invariant: parts are contiguous and non-overlapping.
    Group { parts: Box<[Token; 3]> },
}

impl Token {
    /// Create a plain token covering `[start, end)`.
    ///
    /// `text` must be the input substring covered by the span, so
    /// `text.len() == end - start` always holds for callers that slice the
    /// input correctly.
    pub fn simple(start: usize, end: usize, text: impl Into<String>) -> Token {
        debug_assert!(start <= end);
        Token::Simple {
            start,
            end,
            text: text.into(),
        }
    }

    /// Get the canonical empty token at `position`.
    ///
    /// Goes through the interning cache (see [intern]); callers must not rely
    /// on identity, only on value equality.
    pub fn empty(position: usize) -> Token {
        intern::empty_at(position)
    }

    /// Create a group token from its three parts.
    ///
    /// Invariant: `group_start.end() <= content.start()` and
    /// `content.end() <= group_end.start()` (content strictly between the
    /// delimiters, contiguous in source).
    pub fn group(group_start: Token, content: Token, group_end: Token) -> Token {
        debug_assert!(group_start.end() <= content.start());
        debug_assert!(content.end() <= group_end.start());
        Token::Group {
            parts: Box::new([group_start, content, group_end]),
        }
    }

    /// Start offset of this token (for groups: the first part's start).
    pub fn start(&self) -> usize {
        match self {
            Token::Simple { start, .. } => *start,
            Token::Empty { position } => *position,
            Token::Group { parts } => parts[0].start(),
        }
    }

    /// End offset of this token (for groups: the last part's end).
    pub fn end(&self) -> usize {
        match self {
            Token::Simple { end, .. } => *end,
            Token::Empty { position } => *position,
            Token::Group { parts } => parts[2].end(),
        }
    }

    /// Width of the covered span in bytes.
    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    pub fn is_empty_span(&self) -> bool {
        self.start() == self.end()
    }

    /// The text covered by this token. For group tokens this concatenates the
    /// parts, which equals the input substring because parts are contiguous.
    pub fn text(&self) -> String {
        match self {
            Token::Simple { text, .. } => text.clone(),
            Token::Empty { .. } => String::new(),
            Token::Group { parts } => parts.iter().map(Token::text).collect(),
        }
    }

    /// The variant tag of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Simple { .. } => TokenKind::Simple,
            Token::Empty { .. } => TokenKind::Empty,
            Token::Group { .. } => TokenKind::Group,
        }
    }

    /// Check if this token is composed of sub-tokens.
    pub fn is_compound(&self) -> bool {
        matches!(self, Token::Group { .. })
    }

    /// Check if this token is a plain leaf token.
    pub fn is_simple(&self) -> bool {
        matches!(self, Token::Simple { .. })
    }

    /// Check if this token is the zero-width empty marker.
    pub fn is_empty_token(&self) -> bool {
        matches!(self, Token::Empty { .. })
    }

    /// Check if this token is a group.
    pub fn is_group(&self) -> bool {
        matches!(self, Token::Group { .. })
    }

    /// Sub-tokens of a compound token in source order; empty for leaves.
    pub fn parts(&self) -> &[Token] {
        match self {
            Token::Group { parts } => &parts[..],
            _ => &[],
        }
    }

    /// Consume a compound token into its parts; `None` for leaves.
    pub fn into_parts(self) -> Option<Vec<Token>> {
        match self {
            Token::Group { parts } => Some(Vec::from(*parts)),
            _ => None,
        }
    }

    /// Start delimiter of a group token.
    pub fn group_start(&self) -> Option<&Token> {
        match self {
            Token::Group { parts } => Some(&parts[0]),
            _ => None,
        }
    }

    /// Content part of a group token (simple or empty).
    pub fn content(&self) -> Option<&Token> {
        match self {
            Token::Group { parts } => Some(&parts[1]),
            _ => None,
        }
    }

    /// End delimiter of a group token.
    pub fn group_end(&self) -> Option<&Token> {
        match self {
            Token::Group { parts } => Some(&parts[2]),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Simple { start, end, text } => {
                write!(f, "Simple({}..{}, {:?})", start, end, text)
            }
            Token::Empty { position } => write!(f, "Empty({})", position),
            Token::Group { parts } => {
                write!(f, "Group({}, {}, {})", parts[0], parts[1], parts[2])
            }
        }
    }
}

/// Interning cache for empty tokens.
///
/// Repeated empty tokens at the same position can share a cached
/// representation. This is purely an allocation optimization: equality is
/// value-based, so constructing an empty token directly is always equivalent.
/// The cache is bounded; positions beyond the bound bypass it.
pub mod intern {
    use super::*;

    /// Maximum number of distinct positions kept in the cache.
    const CACHE_CAPACITY: usize = 256;

    static EMPTY_TOKENS: Lazy<Mutex<HashMap<usize, Token>>> =
        Lazy::new(|| Mutex::new(HashMap::new()));

    /// Get the empty token at `position`, from the cache when possible.
    pub fn empty_at(position: usize) -> Token {
        let mut cache = match EMPTY_TOKENS.lock() {
            Ok(guard) => guard,
            // A poisoned cache only loses the optimization, never correctness.
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(token) = cache.get(&position) {
            return token.clone();
        }
        let token = Token::Empty { position };
        if cache.len() < CACHE_CAPACITY {
            cache.insert(position, token.clone());
        }
        token
    }
}
