//! Unit tests for grouping and filter tokenizer behavior
//!
//! These tests pin down the observable contract of the grouping tokenizer
//! (group shape, multiplicity, the fatal-input set) and the filter
//! tokenizer's kind-based selection, using parameterized input grids.

use retok::factory;
use retok::{Token, TokenKind, Tokenizer};
use rstest::rstest;

fn grouping() -> Box<dyn Tokenizer> {
    factory::grouping_tokenizer(r"\$\{", r"\}", 0).expect("patterns must compile")
}

#[rstest]
#[case("")]
#[case("x")]
#[case("hello world")]
fn test_group_round_trip(#[case] content: &str) {
    let text = format!("${{{}}}", content);
    let tokens = grouping().parse(&text).unwrap();

    assert_eq!(tokens.len(), 1);
    let group = &tokens[0];
    assert!(group.is_group());
    assert_eq!(group.group_start().unwrap().text(), "${");
    assert_eq!(group.group_end().unwrap().text(), "}");

    let inner = group.content().unwrap();
    if content.is_empty() {
        assert_eq!(inner, &Token::empty(2));
    } else {
        assert_eq!(inner, &Token::simple(2, 2 + content.len(), content));
    }
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
fn test_multiplicity(#[case] n: usize) {
    // n concatenated empty groups with no intervening text.
    let text = "${}".repeat(n);
    let tokens = grouping().parse(&text).unwrap();

    assert_eq!(tokens.len(), n);
    for (i, token) in tokens.iter().enumerate() {
        assert!(token.is_group());
        assert_eq!(token.start(), i * 3);
        assert_eq!(token.end(), i * 3 + 3);
    }
}

#[test]
fn test_adjacent_empty_groups_example() {
    let tokens = grouping().parse("${}${}").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::group(
                Token::simple(0, 2, "${"),
                Token::empty(2),
                Token::simple(2, 3, "}"),
            ),
            Token::group(
                Token::simple(3, 5, "${"),
                Token::empty(5),
                Token::simple(5, 6, "}"),
            ),
        ]
    );
}

// The fatal-input set: every input here must fail, and only the truncated
// ones (open group, no close) are continuable.
#[rstest]
#[case("${", true)]
#[case("}", false)]
#[case("}${", false)]
#[case("${${", false)]
#[case("a${", true)]
#[case("a}", false)]
fn test_fatal_input_set(#[case] text: &str, #[case] continuable: bool) {
    let err = grouping().parse(text).unwrap_err();
    assert_eq!(
        err.is_continuable(),
        continuable,
        "unexpected continuability for {:?}: {}",
        text,
        err
    );
}

#[test]
fn test_filter_selects_groups_only() {
    let inner = grouping();
    let filter = factory::filter_tokenizer(inner, [TokenKind::Group], false);
    let tokens = filter.parse("a${x}b${y}").unwrap();

    assert_eq!(tokens.len(), 2);
    assert!(tokens.iter().all(|t| t.is_group()));
    assert_eq!(tokens[0].text(), "${x}");
    assert_eq!(tokens[1].text(), "${y}");
}

#[test]
fn test_filter_with_descent_selects_inner_content() {
    let inner = grouping();
    let filter = factory::filter_tokenizer(inner, [TokenKind::Simple], true);
    let tokens = filter.parse("a${x}b").unwrap();

    // Outer plain tokens and the group's parts, in pre-order; the group
    // wrapper itself is gone.
    assert!(tokens.iter().all(|t| t.is_simple()));
    let texts: Vec<String> = tokens.iter().map(Token::text).collect();
    assert_eq!(texts, vec!["a", "${", "x", "}", "b"]);
}

#[test]
fn test_empty_token_identity_irrelevance() {
    // Repeated lookups must be value-equal no matter whether the interning
    // cache returned a shared representation.
    for position in [0, 1, 99, 100_000] {
        assert_eq!(Token::empty(position), Token::empty(position));
    }
}

#[test]
fn test_tokens_serialize_to_json_and_back() {
    let tokens = grouping().parse("a${x}").unwrap();
    let json = serde_json::to_string(&tokens).expect("tokens serialize");
    let back: Vec<Token> = serde_json::from_str(&json).expect("tokens deserialize");
    assert_eq!(tokens, back);
}
