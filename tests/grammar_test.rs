//! Tests for word generation and validation of the grammar S → aSb | ε

use langlab::grammar::{generate, generate_all, Word};
use langlab::util::testing;
use rstest::rstest;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

// ============================================================
// Generation
// ============================================================

#[test]
fn given_depth_zero_when_generating_then_empty_word() {
    let word = generate(0);
    assert_eq!(word, Word::Epsilon);
    assert_eq!(word.to_string(), "ε");
    assert_eq!(word.len(), 0);
}

#[rstest]
#[case(1, "ab")]
#[case(2, "aabb")]
#[case(3, "aaabbb")]
fn given_depth_when_generating_then_balanced_word(#[case] n: usize, #[case] expected: &str) {
    let word = generate(n);
    assert_eq!(word, Word::Literal(expected.to_string()));
    assert_eq!(word.len(), 2 * n);
}

#[test]
fn given_max_depth_when_enumerating_language_then_one_word_per_depth() {
    let words = generate_all(3);
    assert_eq!(words.len(), 4);
    for (n, word) in words.iter().enumerate() {
        assert_eq!(word.len(), 2 * n);
        assert_eq!(word.derivation_depth().unwrap(), n);
    }
}

// ============================================================
// Parsing and validation
// ============================================================

#[rstest]
#[case("")]
#[case("ε")]
fn given_empty_spelling_when_parsing_then_epsilon(#[case] text: &str) {
    assert_eq!(Word::parse(text).unwrap(), Word::Epsilon);
}

#[rstest]
#[case("ab", 1)]
#[case("aabb", 2)]
#[case("aaaabbbb", 4)]
fn given_balanced_word_when_parsing_then_depth_recovered(
    #[case] text: &str,
    #[case] expected_depth: usize,
) {
    let word = Word::parse(text).unwrap();
    assert_eq!(word.derivation_depth().unwrap(), expected_depth);
}

#[rstest]
#[case("ba")]
#[case("aab")]
#[case("abb")]
#[case("abab")]
#[case("aba")]
#[case("xy")]
fn given_malformed_word_when_parsing_then_rejected(#[case] text: &str) {
    let result = Word::parse(text);
    assert!(result.is_err(), "{:?} must be rejected", text);
}

#[test]
fn given_generated_words_when_parsing_back_then_depth_round_trips() {
    for n in 0..=10 {
        let word = generate(n);
        assert_eq!(word.derivation_depth().unwrap(), n);
    }
}
