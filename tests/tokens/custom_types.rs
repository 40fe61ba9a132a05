//! Integration tests for sets restricted to one token variant
//!
//! Tests the acceptance predicate, labels, and duplicate policies.

use udt_foundation::{ErrorKind, Result, Value};
use udt_tokens::{DuplicatePolicy, SetConfig, Token, TokenLike, TokenSet};

#[derive(Clone, Debug, PartialEq)]
enum DesignToken {
    Test(Token),
    Other(Token),
}

impl TokenLike for DesignToken {
    fn id(&self) -> &str {
        match self {
            Self::Test(t) | Self::Other(t) => t.id(),
        }
    }
}

fn is_test_token(t: &DesignToken) -> bool {
    matches!(t, DesignToken::Test(_))
}

fn parse_test_token(raw: &Value) -> Result<DesignToken> {
    Token::from_value(raw).map(DesignToken::Test)
}

fn test_token(id: &str) -> DesignToken {
    DesignToken::Test(Token::new(id).unwrap())
}

fn other_token(id: &str) -> DesignToken {
    DesignToken::Other(Token::new(id).unwrap())
}

#[test]
fn adding_a_valid_token_works() {
    let mut set = TokenSet::new(is_test_token, parse_test_token);
    let t = test_token("test");
    set.insert(t.clone()).unwrap();
    assert!(set.contains(&t));
}

#[test]
fn adding_an_invalid_token_fails() {
    let mut set = TokenSet::new(is_test_token, parse_test_token);
    let err = set.insert(other_token("fail")).unwrap_err();
    assert!(err.is_invalid_token_type());
    assert_eq!(set.len(), 0);
}

#[test]
fn rejection_names_the_configured_label() {
    let mut set = TokenSet::with_config(
        is_test_token,
        parse_test_token,
        SetConfig::labeled("test token"),
    );
    let err = set.insert(other_token("fail")).unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::InvalidTokenType {
            id: "fail".into(),
            expected: "test token".into(),
        }
    );
    assert_eq!(err.context.unwrap().source.as_deref(), Some("test token"));
}

#[test]
fn failed_insert_leaves_contents_untouched() {
    let mut set = TokenSet::new(is_test_token, parse_test_token);
    set.insert(test_token("a")).unwrap();
    set.insert(test_token("b")).unwrap();
    let before = set.snapshot();

    assert!(set.insert(other_token("c")).is_err());
    assert!(set.insert(other_token("a")).is_err());

    assert_eq!(set, before);
}

#[test]
fn predicate_can_be_queried() {
    let set = TokenSet::new(is_test_token, parse_test_token);
    assert!(set.accepts(&test_token("x")));
    assert!(!set.accepts(&other_token("x")));
}

#[test]
fn first_write_wins_by_default() {
    let mut set = TokenSet::new(is_test_token, parse_test_token);
    set.insert(DesignToken::Test(Token::new("a").unwrap().with_description("first")))
        .unwrap();
    set.insert(DesignToken::Test(Token::new("a").unwrap().with_description("second")))
        .unwrap();

    let DesignToken::Test(stored) = set.find_by_id("a").unwrap() else {
        panic!("Expected Test token");
    };
    assert_eq!(stored.description(), Some("first"));
}

#[test]
fn replace_in_place_keeps_position() {
    let mut set = TokenSet::with_config(
        is_test_token,
        parse_test_token,
        SetConfig::default().with_duplicates(DuplicatePolicy::ReplaceInPlace),
    );
    set.insert(test_token("a")).unwrap();
    set.insert(test_token("b")).unwrap();
    set.insert(DesignToken::Test(Token::new("a").unwrap().with_description("second")))
        .unwrap();

    assert_eq!(set.len(), 2);
    let ids: Vec<_> = set.values().map(TokenLike::id).collect();
    assert_eq!(ids, vec!["a", "b"]);
    let DesignToken::Test(stored) = set.find_by_id("a").unwrap() else {
        panic!("Expected Test token");
    };
    assert_eq!(stored.description(), Some("second"));
}
