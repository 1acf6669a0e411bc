//! # retok
//!
//! A composable, resumable tokenizer library.
//!
//! retok turns a character span into a sequence of typed, positioned tokens.
//! Tokenizers are pure functions over their input: the split tokenizer removes
//! delimiter matches and keeps the text between them, the grouping tokenizer
//! recognizes delimiter-bounded regions (such as `${...}` placeholders) as
//! three-part group tokens, and the filter tokenizer re-selects tokens from
//! another tokenizer's output by kind.
//!
//! The grouping tokenizer is resumable: when the input ends while a group is
//! still open, the resulting [`ParseError`] carries a continuation state that
//! can seed a second tokenizer for the next chunk of input. The combined token
//! stream is identical to tokenizing the concatenated input in one pass.
//!
//! See the [tokenize] module for the full API; construction normally goes
//! through [`tokenize::factory`].

pub mod tokenize;

pub use tokenize::factory;
pub use tokenize::{
    ConfigError, Continuation, GroupingState, ParseError, Token, TokenKind, Tokenizer,
};
