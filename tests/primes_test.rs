//! Tests for the primality helpers

use langlab::primes::{is_composite, is_prime, next_prime_after};
use langlab::util::testing;
use rstest::rstest;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[rstest]
#[case(2)]
#[case(3)]
#[case(5)]
#[case(13)]
#[case(7919)]
fn given_prime_when_testing_then_recognized(#[case] num: u64) {
    assert!(is_prime(num));
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(4)]
#[case(9)]
#[case(7917)]
fn given_non_prime_when_testing_then_rejected(#[case] num: u64) {
    assert!(!is_prime(num));
}

#[test]
fn given_zero_and_one_when_testing_compositeness_then_neither_is_composite() {
    // 0 and 1 are neither prime nor composite
    assert!(!is_composite(0));
    assert!(!is_composite(1));
    assert!(!is_prime(0));
    assert!(!is_prime(1));
}

#[test]
fn given_prime_when_testing_compositeness_then_not_composite() {
    assert!(!is_composite(11));
    assert!(is_composite(12));
}

#[rstest]
#[case(0, 2)]
#[case(2, 3)]
#[case(10, 11)]
#[case(13, 17)]
#[case(7907, 7919)]
fn given_number_when_asking_next_prime_then_smallest_larger_prime_returned(
    #[case] num: u64,
    #[case] expected: u64,
) {
    assert_eq!(next_prime_after(num), expected);
}
