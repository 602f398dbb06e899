//! Cache Simulator (CacheSim) Unit Tests.
//!
//! Verifies a single set-associative level: address mapping, hit/miss/store
//! classification, block sharing, and per-set LRU replacement.
//!
//! The CacheSim is constructed directly from CacheConfig; no CPU is needed.

use e20_core::common::ConfigError;
use e20_core::config::CacheConfig;
use e20_core::core::units::cache::{AccessStatus, CacheSim};
use rstest::rstest;

fn cache(size: usize, assoc: usize, block: usize) -> CacheSim {
    CacheSim::new(&CacheConfig::new(size, assoc, block)).unwrap()
}

// ══════════════════════════════════════════════════════════
// 1. Address mapping
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::direct_mapped(64, 1, 16, 64, 0, 1)]
#[case::direct_mapped_second_row(64, 1, 16, 20, 1, 0)]
#[case::two_way(64, 2, 4, 13, 3, 0)]
#[case::two_way_tag(64, 2, 4, 40, 2, 1)]
#[case::fully_associative(16, 4, 4, 4095, 0, 1023)]
#[case::single_word_blocks(8, 1, 1, 13, 5, 1)]
fn set_and_tag(
    #[case] size: usize,
    #[case] assoc: usize,
    #[case] block: usize,
    #[case] addr: usize,
    #[case] set: usize,
    #[case] tag: usize,
) {
    let c = cache(size, assoc, block);
    assert_eq!(c.set_index(addr), set, "set of {addr}");
    assert_eq!(c.tag(addr), tag, "tag of {addr}");
}

#[test]
fn rows_round_down_for_uneven_sizes() {
    assert_eq!(cache(100, 1, 16).rows(), 6);
    assert_eq!(cache(64, 2, 4).rows(), 8);
    assert_eq!(cache(64, 2, 4).ways(), 2);
}

#[test]
fn geometry_without_rows_is_rejected() {
    let err = CacheSim::new(&CacheConfig::new(4, 2, 4)).unwrap_err();
    assert!(matches!(err, ConfigError::NoRows { size: 4, .. }));
}

#[test]
fn zero_field_is_rejected() {
    let err = CacheSim::new(&CacheConfig::new(64, 0, 4)).unwrap_err();
    assert_eq!(
        err,
        ConfigError::Zero {
            field: "associativity"
        }
    );
}

// ══════════════════════════════════════════════════════════
// 2. Classification
// ══════════════════════════════════════════════════════════

#[test]
fn cold_load_misses_then_hits() {
    let mut c = cache(64, 1, 16);
    assert_eq!(c.classify(0, false), AccessStatus::Miss);
    assert_eq!(c.classify(0, false), AccessStatus::Hit);
}

#[test]
fn words_in_one_block_share_a_line() {
    let mut c = cache(64, 1, 16);
    assert_eq!(c.classify(0, false), AccessStatus::Miss);
    assert_eq!(c.classify(15, false), AccessStatus::Hit);
    assert_eq!(c.classify(16, false), AccessStatus::Miss);
}

#[test]
fn direct_mapped_conflict_evicts() {
    let mut c = cache(64, 1, 16);
    assert_eq!(c.classify(0, false), AccessStatus::Miss);
    assert_eq!(c.classify(64, false), AccessStatus::Miss);
    assert_eq!(c.classify(0, false), AccessStatus::Miss);
}

#[test]
fn store_installs_tag() {
    let mut c = cache(64, 1, 16);
    assert_eq!(c.classify(32, true), AccessStatus::Store);
    assert!(c.contains(32));
    assert_eq!(c.classify(32, false), AccessStatus::Hit);
}

#[test]
fn store_to_resident_block_is_still_store() {
    let mut c = cache(64, 1, 16);
    assert_eq!(c.classify(32, false), AccessStatus::Miss);
    assert_eq!(c.classify(33, true), AccessStatus::Store);
}

// ══════════════════════════════════════════════════════════
// 3. Replacement
// ══════════════════════════════════════════════════════════

/// 8 words, 2-way, 1-word blocks: 4 rows; addresses 0, 4, 8 share row 0.
#[test]
fn lru_way_is_evicted() {
    let mut c = cache(8, 2, 1);
    assert_eq!(c.classify(0, false), AccessStatus::Miss);
    assert_eq!(c.classify(4, false), AccessStatus::Miss);
    assert_eq!(c.classify(0, false), AccessStatus::Hit);
    // 4 is now least recently used.
    assert_eq!(c.classify(8, false), AccessStatus::Miss);
    assert_eq!(c.classify(0, false), AccessStatus::Hit);
    assert_eq!(c.classify(4, false), AccessStatus::Miss);
}

#[test]
fn recency_is_tracked_per_row() {
    let mut c = cache(8, 2, 1);
    assert_eq!(c.classify(0, false), AccessStatus::Miss);
    assert_eq!(c.classify(4, false), AccessStatus::Miss);
    // Row 1 traffic must not change row 0's order.
    assert_eq!(c.classify(1, false), AccessStatus::Miss);
    assert_eq!(c.classify(5, false), AccessStatus::Miss);
    assert_eq!(c.classify(8, false), AccessStatus::Miss);
    assert!(!c.contains(0));
    assert!(c.contains(4));
    assert!(c.contains(1));
    assert!(c.contains(5));
}

#[test]
fn contains_does_not_refresh_recency() {
    let mut c = cache(8, 2, 1);
    let _ = c.classify(0, false);
    let _ = c.classify(4, false);
    assert!(c.contains(0));
    let _ = c.classify(8, false);
    assert!(!c.contains(0));
    assert_eq!(c.resident_tags(0), vec![2, 1]);
}

#[test]
fn fully_associative_holds_every_block_until_full() {
    let mut c = cache(16, 4, 4);
    for addr in [0, 100, 200, 300] {
        assert_eq!(c.classify(addr, false), AccessStatus::Miss);
    }
    for addr in [0, 100, 200, 300] {
        assert_eq!(c.classify(addr, false), AccessStatus::Hit);
    }
    // 0 is least recently used.
    assert_eq!(c.classify(400, false), AccessStatus::Miss);
    assert!(!c.contains(0));
    assert!(c.contains(100));
}
