//! Tokenizer family: token model, tokenizer contract, and concrete lexers.
//!
//!     retok opts for handling more complexity in the tokenizers themselves in
//!     order to keep consumers (template engines and similar) very simple. A
//!     consumer only ever calls `parse` and walks the returned token sequence.
//!
//! Token Layers
//!
//!     Plain Tokens:
//!         Leaf tokens covering a span of source text. Produced by the split
//!         tokenizer for every maximal non-empty gap between delimiter matches,
//!         and by the grouping tokenizer for text between groups. See [token].
//!
//!     Empty Tokens:
//!         Zero-width leaf tokens marking "no content" at a position. Emitted
//!         only as the content part of a group whose delimiters are adjacent.
//!
//!     Group Tokens:
//!         Compound tokens with exactly three parts in source order: the start
//!         delimiter, the content (plain or empty), and the end delimiter.
//!         Produced by the grouping tokenizer. See [grouping].
//!
//! Resumption
//!
//!     The grouping tokenizer can run out of input while a group is open. That
//!     is the only continuable failure: the error carries a [Continuation]
//!     capturing the pending start token and the tokens emitted so far, and a
//!     resumed tokenizer built from it (see [factory]) picks up where the first
//!     one stopped. Nested group starts and stray group ends are fatal.

pub mod factory;
pub mod filter;
pub mod formatting;
pub mod grouping;
pub mod interface;
pub mod split;
pub mod token;

pub use filter::FilterTokenizer;
pub use formatting::{detokenize, ToSourceString};
pub use grouping::GroupingTokenizer;
pub use interface::{ConfigError, Continuation, GroupingState, ParseError, Tokenizer};
pub use split::SplitTokenizer;
pub use token::{Token, TokenKind};
