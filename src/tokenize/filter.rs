//! Filter tokenizer: kind-based re-selection over another tokenizer's output
//!
//! This decorator wraps another tokenizer and a set of accepted token kinds.
//! After the wrapped tokenizer produces its token sequence, the filter walks
//! it in pre-order: accepted tokens are kept as-is (no descent into them,
//! even when compound); rejected compound tokens are optionally recursed
//! into; everything else is dropped.
//!
//! This lets a caller ask for "only group tokens" or "only the inner content
//! of groups, flattened" from the same underlying grouping-tokenizer output.
//! Errors from the wrapped tokenizer pass through unchanged, so a filtered
//! grouping tokenizer stays resumable.

use std::collections::HashSet;

use crate::tokenize::interface::{ParseError, Tokenizer};
use crate::tokenize::token::{Token, TokenKind};

/// Tokenizer decorator that re-selects tokens by kind.
pub struct FilterTokenizer {
    inner: Box<dyn Tokenizer>,
    accepted: HashSet<TokenKind>,
    go_into_compounds: bool,
}

impl FilterTokenizer {
    /// Create a filter over another tokenizer's output.
    ///
    /// # Arguments
    /// * `inner` - The tokenizer whose output is filtered
    /// * `accepted` - Token kinds to keep
    /// * `go_into_compounds` - Whether to recurse into rejected compound
    ///   tokens and apply the same selection to their parts
    pub fn new(
        inner: Box<dyn Tokenizer>,
        accepted: impl IntoIterator<Item = TokenKind>,
        go_into_compounds: bool,
    ) -> FilterTokenizer {
        FilterTokenizer {
            inner,
            accepted: accepted.into_iter().collect(),
            go_into_compounds,
        }
    }

    fn select(&self, tokens: Vec<Token>, out: &mut Vec<Token>) {
        for token in tokens {
            if self.accepted.contains(&token.kind()) {
                out.push(token);
            } else if self.go_into_compounds && token.is_compound() {
                if let Some(parts) = token.into_parts() {
                    self.select(parts, out);
                }
            }
        }
    }
}

impl Tokenizer for FilterTokenizer {
    fn name(&self) -> &'static str {
        "filter"
    }

    fn parse(&self, text: &str) -> Result<Vec<Token>, ParseError> {
        let tokens = self.inner.parse(text)?;
        let mut out = Vec::new();
        self.select(tokens, &mut out);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::grouping::GroupingTokenizer;

    fn grouping() -> Box<dyn Tokenizer> {
        Box::new(GroupingTokenizer::new(r"\$\{", r"\}", 0).expect("patterns must compile"))
    }

    #[test]
    fn test_keep_only_groups() {
        let filter = FilterTokenizer::new(grouping(), [TokenKind::Group], false);
        let tokens = filter.parse("a${x}b${y}c").unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(tokens.iter().all(Token::is_group));
        assert_eq!(tokens[0].text(), "${x}");
        assert_eq!(tokens[1].text(), "${y}");
    }

    #[test]
    fn test_keep_simple_without_descent_drops_group_parts() {
        let filter = FilterTokenizer::new(grouping(), [TokenKind::Simple], false);
        let tokens = filter.parse("a${x}b").unwrap();
        // Outer plain tokens survive; the group and its parts are dropped.
        assert_eq!(
            tokens,
            vec![Token::simple(0, 1, "a"), Token::simple(5, 6, "b")]
        );
    }

    #[test]
    fn test_descent_flattens_group_parts() {
        let filter = FilterTokenizer::new(grouping(), [TokenKind::Simple], true);
        let tokens = filter.parse("a${x}b").unwrap();
        // Pre-order: outer "a", then the group's parts, then outer "b". The
        // delimiters and content are all simple tokens, so all three survive.
        assert_eq!(
            tokens,
            vec![
                Token::simple(0, 1, "a"),
                Token::simple(1, 3, "${"),
                Token::simple(3, 4, "x"),
                Token::simple(4, 5, "}"),
                Token::simple(5, 6, "b"),
            ]
        );
    }

    #[test]
    fn test_descent_with_empty_kind_selects_empty_content() {
        let filter = FilterTokenizer::new(grouping(), [TokenKind::Empty], true);
        let tokens = filter.parse("a${}b").unwrap();
        assert_eq!(tokens, vec![Token::empty(3)]);
    }

    #[test]
    fn test_accepted_compound_is_not_descended_into() {
        let filter = FilterTokenizer::new(grouping(), [TokenKind::Group, TokenKind::Simple], true);
        let tokens = filter.parse("${x}").unwrap();
        // The group itself is accepted, so its parts are not re-selected.
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_group());
    }

    #[test]
    fn test_empty_accepted_set_drops_everything() {
        let filter = FilterTokenizer::new(grouping(), [], false);
        assert_eq!(filter.parse("a${x}b").unwrap(), vec![]);
    }

    #[test]
    fn test_errors_pass_through() {
        let filter = FilterTokenizer::new(grouping(), [TokenKind::Group], false);
        let err = filter.parse("a${").unwrap_err();
        assert!(err.is_continuable());

        let err = filter.parse("}").unwrap_err();
        assert!(!err.is_continuable());
    }

    #[test]
    fn test_name() {
        let filter = FilterTokenizer::new(grouping(), [TokenKind::Group], false);
        assert_eq!(filter.name(), "filter");
    }
}
