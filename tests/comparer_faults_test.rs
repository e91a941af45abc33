//! Tests for misbehaving and fallible comparers
//!
//! An inconsistent comparer may leave keys in any order, but the sort must
//! terminate, never index out of bounds, and keep the elements intact.

use std::cmp::Ordering;
use std::error::Error;

use tola_sort::SortError;
use tola_sort::sort;

fn xorshift(state: &mut u64) -> u64 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;
    *state
}

#[test]
fn test_random_comparer_terminates_with_permutation() {
    for seed in 1..50u64 {
        let mut state = seed;
        let mut keys: Vec<u32> = (0..257).collect();
        let mut values: Vec<u32> = keys.clone();

        let result = sort::sort_pairs_by(&mut keys, &mut values, |_, _| match xorshift(&mut state) % 3 {
            0 => Ordering::Less,
            1 => Ordering::Equal,
            _ => Ordering::Greater,
        });

        match result {
            Ok(()) => {}
            Err(err) => assert!(err.is_bad_comparer(), "unexpected error: {}", err),
        }

        assert_eq!(keys, values, "pairs drifted apart with seed {}", seed);
        let mut seen = keys.clone();
        seen.sort_unstable();
        assert_eq!(seen, (0..257).collect::<Vec<_>>());
    }
}

#[test]
fn test_always_less_reports_bad_comparer() {
    let mut keys: Vec<i32> = (0..100).collect();
    let err = sort::sort_by(&mut keys, |_, _| Ordering::Less).unwrap_err();
    assert!(err.is_bad_comparer());

    let message = err.to_string();
    assert!(message.contains("inconsistent"), "{}", message);
    assert!(message.contains("ByFn"), "comparer identity missing: {}", message);
}

#[test]
fn test_always_greater_terminates() {
    // Both scans stop at once, so this never leaves bounds
    let mut keys: Vec<i32> = (0..100).rev().collect();
    sort::sort_by(&mut keys, |_, _| Ordering::Greater).unwrap();
    let mut seen = keys.clone();
    seen.sort_unstable();
    assert_eq!(seen, (0..100).collect::<Vec<_>>());
}

#[test]
fn test_always_equal_is_harmless() {
    let mut keys: Vec<i32> = (0..100).rev().collect();
    sort::sort_by(&mut keys, |_, _| Ordering::Equal).unwrap();
    let mut seen = keys.clone();
    seen.sort_unstable();
    assert_eq!(seen, (0..100).collect::<Vec<_>>());
}

// =============================================================================
// Fallible Comparers
// =============================================================================

#[derive(Debug, PartialEq)]
struct Unparsable(String);

impl std::fmt::Display for Unparsable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cannot parse {:?}", self.0)
    }
}

impl Error for Unparsable {}

fn parse_cmp(a: &&str, b: &&str) -> Result<Ordering, Unparsable> {
    let a: i64 = a.parse().map_err(|_| Unparsable(a.to_string()))?;
    let b: i64 = b.parse().map_err(|_| Unparsable(b.to_string()))?;
    Ok(a.cmp(&b))
}

#[test]
fn test_fallible_comparer_success() {
    let mut keys = ["10", "9", "100", "-3"];
    sort::try_sort_by(&mut keys, parse_cmp).unwrap();
    assert_eq!(keys, ["-3", "9", "10", "100"]);
}

#[test]
fn test_fallible_comparer_error_is_wrapped() {
    let mut keys = ["10", "nine", "100", "-3"];
    let err = sort::try_sort_by(&mut keys, parse_cmp).unwrap_err();

    assert_eq!(err.to_string(), "comparison failed");
    match &err {
        SortError::ComparisonFailed(cause) => assert_eq!(cause.0, "nine"),
        other => panic!("expected ComparisonFailed, got {:?}", other),
    }
    let source = err.source().expect("cause should be chained");
    assert_eq!(source.to_string(), "cannot parse \"nine\"");

    let mut sorted = keys.to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, ["-3", "10", "100", "nine"]);
}

#[test]
fn test_fallible_pairs_error() {
    let mut keys = [3, 2, 1];
    let mut values = ['c', 'b', 'a'];
    let err = sort::try_sort_pairs_by(&mut keys, &mut values, |a: &i32, b: &i32| {
        if *a == 2 || *b == 2 { Err("two") } else { Ok(a.cmp(b)) }
    })
    .unwrap_err();
    assert!(matches!(err, SortError::ComparisonFailed("two")));
}
