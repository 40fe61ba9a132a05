//! Integration tests for core token set behavior
//!
//! Tests insertion, membership, removal, lookup, and ordered iteration.

use udt_foundation::reference_for;
use udt_tokens::{Token, TokenLike, TokenReference, TokenSet};

fn token(id: &str) -> Token {
    Token::new(id).unwrap()
}

fn three() -> [Token; 3] {
    [token("t1"), token("t2"), token("t3")]
}

// =============================================================================
// Size
// =============================================================================

#[test]
fn token_set_is_initially_empty() {
    let set = TokenSet::basic();
    assert_eq!(set.len(), 0);
    assert!(set.values().next().is_none());
}

#[test]
fn adding_a_token_increments_the_size() {
    let mut set = TokenSet::basic();
    let initial = set.len();
    set.insert(token("test")).unwrap();
    assert_eq!(set.len(), initial + 1);
}

#[test]
fn adding_the_same_token_twice_increments_once() {
    let mut set = TokenSet::basic();
    let initial = set.len();
    let t = token("test-2");
    set.insert(t.clone()).unwrap();
    set.insert(t).unwrap();
    assert_eq!(set.len(), initial + 1);
}

#[test]
fn insert_returns_the_same_set() {
    let mut set = TokenSet::basic();
    let set_ptr: *const TokenSet<Token> = &set;
    let returned: *const TokenSet<Token> = set.insert(token("test-3")).unwrap();
    assert!(std::ptr::eq(set_ptr, returned));
}

// =============================================================================
// Membership and removal
// =============================================================================

#[test]
fn presence_can_be_checked() {
    let mut set = TokenSet::basic();
    let t = token("foo");
    assert!(!set.contains(&t));
    set.insert(t.clone()).unwrap();
    assert!(set.contains(&t));
}

#[test]
fn tokens_can_be_deleted() {
    let mut set = TokenSet::basic();
    let t = token("bar");
    set.insert(t.clone()).unwrap();
    assert!(set.remove(&t));
    assert!(!set.contains(&t));
}

#[test]
fn deleting_a_missing_token_returns_false() {
    let mut set = TokenSet::basic();
    assert!(!set.remove(&token("barfoo")));
    assert_eq!(set.len(), 0);
}

#[test]
fn membership_is_by_reference_not_payload() {
    let mut set = TokenSet::basic();
    set.insert(token("a").with_description("one")).unwrap();
    assert!(set.contains(&token("a").with_description("two")));
    assert!(set.remove(&token("a")));
}

#[test]
fn token_set_can_be_cleared() {
    let mut set = TokenSet::basic();
    set.insert(token("test-1")).unwrap();
    set.insert(token("test-2")).unwrap();
    set.clear();
    assert_eq!(set.len(), 0);
    assert!(set.values().next().is_none());
}

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn tokens_can_be_found_by_reference() {
    let mut set = TokenSet::basic();
    let t = token("search-token");
    set.insert(t.clone()).unwrap();
    assert_eq!(set.find_by_reference(&reference_for("search-token")), Some(&t));
}

#[test]
fn missing_reference_is_not_found() {
    let mut set = TokenSet::basic();
    set.insert(token("foobar")).unwrap();
    assert!(set.find_by_reference(&reference_for("does-not-exist")).is_none());
}

#[test]
fn reference_from_token_matches_reference_from_id() {
    let mut set = TokenSet::basic();
    let t = token("color.primary");
    set.insert(t.clone()).unwrap();
    assert_eq!(set.find_by_reference(&t.reference()), set.find_by_id("color.primary"));
}

// =============================================================================
// Iteration
// =============================================================================

#[test]
fn values_come_out_in_insertion_order() {
    let mut set = TokenSet::basic();
    let tokens = three();
    for t in &tokens {
        set.insert(t.clone()).unwrap();
    }

    let mut i = 0;
    for t in set.values() {
        assert_eq!(t, &tokens[i]);
        i += 1;
    }
    assert_eq!(i, tokens.len());
}

#[test]
fn token_set_is_iterable() {
    let mut set = TokenSet::basic();
    let tokens = three();
    set.try_extend(tokens.clone()).unwrap();

    let mut i = 0;
    for t in &set {
        assert_eq!(t, &tokens[i]);
        i += 1;
    }
    assert_eq!(i, tokens.len());
}

#[test]
fn removing_the_middle_token_keeps_order() {
    let mut set = TokenSet::basic();
    set.try_extend(three()).unwrap();
    set.remove(&token("t2"));
    let ids: Vec<_> = set.values().map(TokenLike::id).collect();
    assert_eq!(ids, vec!["t1", "t3"]);
}

#[test]
fn duplicate_insert_does_not_reorder() {
    let mut set = TokenSet::basic();
    set.try_extend(three()).unwrap();
    set.insert(token("t1")).unwrap();
    let ids: Vec<_> = set.values().map(TokenLike::id).collect();
    assert_eq!(ids, vec!["t1", "t2", "t3"]);
}

#[test]
fn values_reports_exact_length() {
    let mut set = TokenSet::basic();
    set.try_extend(three()).unwrap();
    assert_eq!(set.values().len(), 3);
}

// =============================================================================
// Serializable projection
// =============================================================================

#[test]
fn to_serializable_on_empty_set_is_empty() {
    let set = TokenSet::basic();
    assert!(set.to_serializable().is_empty());
}

#[test]
fn to_serializable_returns_tokens_in_order() {
    let mut set = TokenSet::basic();
    let tokens = three();
    set.try_extend(tokens.clone()).unwrap();

    let out = set.to_serializable();
    assert_eq!(out.len(), tokens.len());
    for (i, t) in out.iter().enumerate() {
        assert_eq!(*t, &tokens[i]);
    }
}
