//! Grouping tokenizer: delimiter-pair segmentation into group tokens
//!
//! This tokenizer recognizes delimiter-bounded regions (such as `${...}`
//! placeholders) and emits them as three-part group tokens: start delimiter,
//! content, end delimiter. Text between groups becomes plain tokens under the
//! same "no separator, no empty token" rule as the split tokenizer; a group
//! whose delimiters are adjacent gets an empty content token.
//!
//! State machine
//!
//!     The scan alternates between two states: `Scanning` (no open group) and
//!     in-group (a start delimiter was seen, its end is still pending).
//!     A group start while a group is already open is fatal (nested groups of
//!     the same delimiter pair are not supported), and a group end with no
//!     open group is fatal. Running out of input while a group is open is the
//!     only continuable failure: the error carries a [GroupingState] from
//!     which a resumed tokenizer can pick up on the next chunk of input.
//!
//! Resumption contract
//!
//!     `continue_offset` on a continuable error is the absolute offset right
//!     after the open start delimiter. The resumed tokenizer must be handed
//!     the original stream from that offset onward and must be constructed
//!     with `offset == continue_offset`; the factory's resuming constructors
//!     document the same contract. Under it, tokens from the first call's
//!     state plus the resumed call's output equal one-pass tokenization of
//!     the concatenated input.

use regex::Regex;

use crate::tokenize::interface::{
    compile_pattern, ConfigError, Continuation, GroupingState, ParseError, Tokenizer,
};
use crate::tokenize::token::Token;

/// Tokenizer that recognizes delimiter-bounded groups.
pub struct GroupingTokenizer {
    group_start: Regex,
    group_end: Regex,
    offset: usize,
    resume: Option<GroupingState>,
}

impl GroupingTokenizer {
    /// Create a grouping tokenizer from start/end delimiter patterns.
    ///
    /// # Arguments
    /// * `start_pattern` - Regular expression matching the opening delimiter
    /// * `end_pattern` - Regular expression matching the closing delimiter
    /// * `offset` - Added to all reported positions
    pub fn new(
        start_pattern: &str,
        end_pattern: &str,
        offset: usize,
    ) -> Result<GroupingTokenizer, ConfigError> {
        Ok(GroupingTokenizer::from_regexes(
            compile_pattern(start_pattern)?,
            compile_pattern(end_pattern)?,
            offset,
        ))
    }

    /// Create a grouping tokenizer from precompiled delimiter patterns.
    pub fn from_regexes(group_start: Regex, group_end: Regex, offset: usize) -> GroupingTokenizer {
        GroupingTokenizer {
            group_start,
            group_end,
            offset,
            resume: None,
        }
    }

    /// Create a grouping tokenizer that resumes a previous partial parse.
    ///
    /// `state` is the continuation state from a continuable `ParseError` of a
    /// tokenizer with the same delimiter patterns. `offset` must equal that
    /// error's `continue_offset`, and the text handed to `parse` must be the
    /// original input stream from that offset onward.
    pub fn resumed(
        state: GroupingState,
        start_pattern: &str,
        end_pattern: &str,
        offset: usize,
    ) -> Result<GroupingTokenizer, ConfigError> {
        let mut tokenizer = GroupingTokenizer::new(start_pattern, end_pattern, offset)?;
        tokenizer.resume = Some(state);
        Ok(tokenizer)
    }

    fn delimiter_token(&self, m: &regex::Match<'_>) -> Result<Token, ParseError> {
        // A zero-width delimiter match would stall the scan without consuming
        // input; reject it outright.
        if m.start() == m.end() {
            return Err(ParseError::fatal(
                "group delimiter pattern matched empty text",
                self.offset + m.start(),
            ));
        }
        Ok(Token::simple(
            self.offset + m.start(),
            self.offset + m.end(),
            m.as_str(),
        ))
    }
}

impl Tokenizer for GroupingTokenizer {
    fn name(&self) -> &'static str {
        "grouping"
    }

    fn parse(&self, text: &str) -> Result<Vec<Token>, ParseError> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut open: Option<Token> = None;
        if let Some(state) = &self.resume {
            tokens = state.prefix.clone();
            open = Some(state.pending_start.clone());
        }

        // Both relative to `text`: `cursor` is the search position, `gap` the
        // start of text not yet covered by an emitted token.
        let mut cursor = 0usize;
        let mut gap = 0usize;

        loop {
            let next_start = self.group_start.find_at(text, cursor);
            let next_end = self.group_end.find_at(text, cursor);

            match open.take() {
                None => match (next_start, next_end) {
                    // A group end with no open group is a stray close.
                    (Some(s), Some(e)) if e.start() < s.start() => {
                        return Err(ParseError::fatal(
                            "stray group end with no matching group start",
                            self.offset + e.start(),
                        ));
                    }
                    (None, Some(e)) => {
                        return Err(ParseError::fatal(
                            "stray group end with no matching group start",
                            self.offset + e.start(),
                        ));
                    }
                    (Some(s), _) => {
                        if s.start() > gap {
                            tokens.push(Token::simple(
                                self.offset + gap,
                                self.offset + s.start(),
                                &text[gap..s.start()],
                            ));
                        }
                        open = Some(self.delimiter_token(&s)?);
                        cursor = s.end();
                        gap = s.end();
                    }
                    (None, None) => {
                        if text.len() > gap {
                            tokens.push(Token::simple(
                                self.offset + gap,
                                self.offset + text.len(),
                                &text[gap..],
                            ));
                        }
                        return Ok(tokens);
                    }
                },
                Some(start_token) => match (next_start, next_end) {
                    // A second group start before the open group closes.
                    (Some(s), maybe_end)
                        if maybe_end.map_or(true, |e| s.start() < e.start()) =>
                    {
                        return Err(ParseError::fatal_with_state(
                            "group start while a group is still open",
                            self.offset + s.start(),
                            Continuation::Grouping(GroupingState {
                                pending_start: start_token,
                                prefix: tokens,
                            }),
                        ));
                    }
                    (_, Some(e)) => {
                        let end_token = self.delimiter_token(&e)?;
                        let content = if e.start() == gap {
                            Token::empty(start_token.end())
                        } else {
                            Token::simple(
                                start_token.end(),
                                self.offset + e.start(),
                                &text[gap..e.start()],
                            )
                        };
                        tokens.push(Token::group(start_token, content, end_token));
                        cursor = e.end();
                        gap = e.end();
                    }
                    (_, None) => {
                        // Truncated input: the only continuable failure.
                        let state = GroupingState {
                            pending_start: start_token,
                            prefix: tokens,
                        };
                        let continue_offset = state.pending_start.end();
                        return Err(ParseError::continuable(
                            "input ended while a group was still open",
                            self.offset + text.len(),
                            continue_offset,
                            Continuation::Grouping(state),
                        ));
                    }
                },
            }
        }
    }
}
