//! Tests for layout-trait classification

use core::num::{NonZeroI8, NonZeroU32, NonZeroU64, NonZeroUsize};
#[cfg(feature = "std")]
use std::sync::Arc;
#[cfg(feature = "std")]
use std::thread;

use tola_sort::classify::{self, Direct};
use tola_sort::prelude::*;
#[cfg(feature = "std")]
use tola_sort::TraitCache;

#[derive(Layout)]
#[allow(dead_code)]
struct Labelled {
    id: u32,
    label: String,
}

#[derive(Layout)]
#[allow(dead_code)]
struct Pair {
    a: i32,
    b: i32,
}

#[derive(Layout)]
#[allow(dead_code)]
struct Nested {
    inner: Pair,
    tag: Option<Labelled>,
}

#[derive(Layout)]
#[allow(dead_code)]
struct Ticket {
    id: NonZeroU64,
    seat: Option<NonZeroU32>,
}

#[derive(Layout)]
#[allow(dead_code)]
struct Handle {
    raw: *const u8,
    len: usize,
}

// =============================================================================
// Reference-free
// =============================================================================

#[test]
fn test_reference_free_scenarios() {
    assert!(i32::IS_REFERENCE_FREE);
    assert!(!Labelled::IS_REFERENCE_FREE);
    assert!(Pair::IS_REFERENCE_FREE);
}

#[test]
fn test_reference_free_recurses() {
    assert!(!Nested::IS_REFERENCE_FREE);
    assert!(<[Pair; 3]>::IS_REFERENCE_FREE);
    assert!(!<[String; 1]>::IS_REFERENCE_FREE);
    assert!(<(u8, Pair, char)>::IS_REFERENCE_FREE);
    assert!(!<(u8, Box<u8>)>::IS_REFERENCE_FREE);
}

#[test]
fn test_pointers_are_reference_free() {
    assert!(Handle::IS_REFERENCE_FREE);
    assert!(<*mut Labelled>::IS_REFERENCE_FREE);
    assert!(!<&'static u8>::IS_REFERENCE_FREE);
    assert!(!<Vec<u8>>::IS_REFERENCE_FREE);
    assert!(!<std::rc::Rc<u8>>::IS_REFERENCE_FREE);
}

// =============================================================================
// Bitwise-equatable
// =============================================================================

#[test]
fn test_bitwise_equatable_scenarios() {
    assert!(char::IS_BITWISE_EQUATABLE);
    assert!(!Pair::IS_BITWISE_EQUATABLE);
}

#[test]
fn test_bitwise_allowlist() {
    assert!(bool::IS_BITWISE_EQUATABLE);
    assert!(u8::IS_BITWISE_EQUATABLE);
    assert!(i16::IS_BITWISE_EQUATABLE);
    assert!(u32::IS_BITWISE_EQUATABLE);
    assert!(i64::IS_BITWISE_EQUATABLE);
    assert!(usize::IS_BITWISE_EQUATABLE);
    assert!(isize::IS_BITWISE_EQUATABLE);
    assert!(<*const u8>::IS_BITWISE_EQUATABLE);

    assert!(!f32::IS_BITWISE_EQUATABLE);
    assert!(!f64::IS_BITWISE_EQUATABLE);
    assert!(!<()>::IS_BITWISE_EQUATABLE);
    assert!(!String::IS_BITWISE_EQUATABLE);
    assert!(!Handle::IS_BITWISE_EQUATABLE);
}

#[test]
fn test_optional_unwraps_only_through_niche() {
    assert!(<Option<char>>::IS_BITWISE_EQUATABLE);
    assert!(<Option<bool>>::IS_BITWISE_EQUATABLE);
    assert!(!<Option<u64>>::IS_BITWISE_EQUATABLE);
    assert!(!<Option<f32>>::IS_BITWISE_EQUATABLE);
    assert!(!<Option<*const u8>>::IS_BITWISE_EQUATABLE);
}

#[test]
fn test_non_zero_integers() {
    assert!(NonZeroU32::IS_REFERENCE_FREE);
    assert!(NonZeroU32::IS_BITWISE_EQUATABLE);
    assert!(NonZeroI8::IS_BITWISE_EQUATABLE);
    assert!(<Option<NonZeroUsize>>::IS_REFERENCE_FREE);

    // The zero value is the niche, so None costs no tag
    assert!(<Option<NonZeroU32>>::IS_BITWISE_EQUATABLE);
    assert!(!<Option<u32>>::IS_BITWISE_EQUATABLE);

    assert!(Ticket::IS_REFERENCE_FREE);
    assert!(!Ticket::IS_BITWISE_EQUATABLE);
}

// =============================================================================
// Classifier Seam and Cache
// =============================================================================

#[test]
fn test_direct_classifier_on_derived() {
    assert!(Direct.is_reference_free(Ticket::DESCRIPTOR));
    assert!(!Direct.is_reference_free(Labelled::DESCRIPTOR));
    assert!(Direct.is_bitwise_equatable(<Option<NonZeroU64>>::DESCRIPTOR));
}

#[cfg(feature = "std")]

#[test]
fn test_direct_and_cache_agree() {
    let cache = TraitCache::new();
    let descriptors = [
        i32::DESCRIPTOR,
        Labelled::DESCRIPTOR,
        Pair::DESCRIPTOR,
        Nested::DESCRIPTOR,
        <Option<char>>::DESCRIPTOR,
        <[u16; 8]>::DESCRIPTOR,
    ];
    for ty in descriptors {
        assert_eq!(cache.is_reference_free(ty), Direct.is_reference_free(ty), "{}", ty);
        assert_eq!(cache.is_bitwise_equatable(ty), Direct.is_bitwise_equatable(ty), "{}", ty);
    }
    assert_eq!(cache.len(), descriptors.len());
}

#[cfg(feature = "std")]
#[test]
fn test_cache_is_deterministic_after_warm_up() {
    let cache = TraitCache::new();
    let first = cache.is_reference_free(Nested::DESCRIPTOR);
    for _ in 0..100 {
        assert_eq!(cache.is_reference_free(Nested::DESCRIPTOR), first);
    }
    let record = cache.record(Nested::DESCRIPTOR).unwrap();
    assert_eq!(record.reference_free, Some(false));
}

#[cfg(feature = "std")]
#[test]
fn test_concurrent_first_queries_share_one_entry() {
    let cache = Arc::new(TraitCache::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                (
                    cache.is_reference_free(Labelled::DESCRIPTOR),
                    cache.is_bitwise_equatable(Labelled::DESCRIPTOR),
                    cache.is_reference_free(Pair::DESCRIPTOR),
                )
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), (false, false, true));
    }
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_global_helpers() {
    assert!(classify::reference_free::<Pair>());
    assert!(!classify::bitwise_equatable::<Pair>());
    assert!(classify::bitwise_equatable::<char>());
    #[cfg(feature = "std")]
    assert!(classify::global().record(Pair::DESCRIPTOR).is_some());
}
