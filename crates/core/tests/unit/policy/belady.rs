//! Belady MIN Policy Tests.
//!
//! Verifies builder validation, farthest-next-use eviction, the tie-break
//! among never-reused pages, and optimality against LRU.

use pagesim_core::ReplacementPolicy;
use pagesim_core::common::{Page, SimError};
use pagesim_core::policy::{BeladyMinBuilder, FutureIndex, LruPolicy, NextUse};
use pagesim_core::trace::Trace;
use pretty_assertions::assert_eq;

use crate::common::builder::{reads, trace_of};

fn replay(policy: &mut dyn ReplacementPolicy, trace: &Trace) -> u64 {
    trace
        .iter()
        .filter(|a| !policy.access(a.page_id, a.is_write).hit)
        .count() as u64
}

// ══════════════════════════════════════════════════════════
// 1. Builder
// ══════════════════════════════════════════════════════════

#[test]
fn build_without_trace_fails() {
    let err = BeladyMinBuilder::new(3).build().unwrap_err();
    assert!(matches!(err, SimError::MissingFutureTrace));
}

#[test]
fn build_with_zero_capacity_fails() {
    let trace = reads(&[1, 2]);
    let err = BeladyMinBuilder::new(0).trace(&trace).build().unwrap_err();
    assert!(matches!(err, SimError::InvalidCapacity { capacity: 0 }));
}

#[test]
fn built_policy_starts_empty_at_time_zero() {
    let trace = reads(&[1, 2, 1]);
    let policy = BeladyMinBuilder::new(2).trace(&trace).build().unwrap();
    assert!(policy.is_empty());
    assert_eq!(policy.clock(), 0);
    assert_eq!(policy.next_use(1), NextUse::At(0));
    assert_eq!(policy.next_use(9), NextUse::Never);
    assert_eq!(policy.name(), "Belady MIN (OPT)");
}

// ══════════════════════════════════════════════════════════
// 2. Future Index
// ══════════════════════════════════════════════════════════

#[test]
fn future_index_tracks_pending_positions() {
    let trace = reads(&[5, 6, 5, 5]);
    let mut index = FutureIndex::build(&trace);
    assert_eq!(index.pages(), 2);
    assert_eq!(index.next_use(5), NextUse::At(0));

    assert!(index.consume(5, 0));
    assert_eq!(index.next_use(5), NextUse::At(2));
    assert!(!index.consume(5, 1));
    assert_eq!(index.pending(5), 2);

    assert!(index.consume(6, 1));
    assert_eq!(index.next_use(6), NextUse::Never);
}

#[test]
fn never_orders_after_every_position() {
    assert!(NextUse::Never > NextUse::At(usize::MAX));
    assert!(NextUse::At(3) > NextUse::At(2));
}

// ══════════════════════════════════════════════════════════
// 3. Eviction
// ══════════════════════════════════════════════════════════

/// Capacity 2, reads 1 2 3 1: page 2 is never used again and goes, so the
/// final access to page 1 hits.
#[test]
fn evicts_page_never_used_again() {
    let trace = reads(&[1, 2, 3, 1]);
    let mut policy = BeladyMinBuilder::new(2).trace(&trace).build().unwrap();
    let _ = policy.access(1, false);
    let _ = policy.access(2, false);
    assert_eq!(policy.access(3, false).victim, Some(Page::new(2, false)));
    assert!(policy.access(1, false).hit);
}

/// Capacity 2, trace 1 2 3 1 2: at t=2 page 2 is used later than page 1,
/// so page 2 is evicted. At t=4 pages 1 and 3 are both dead; page 1 entered
/// first and goes.
#[test]
fn evicts_farthest_next_use_then_oldest_dead_page() {
    let trace = reads(&[1, 2, 3, 1, 2]);
    let mut policy = BeladyMinBuilder::new(2).trace(&trace).build().unwrap();

    assert_eq!(policy.access(1, false).victim, None);
    assert_eq!(policy.access(2, false).victim, None);
    assert_eq!(policy.access(3, false).victim, Some(Page::new(2, false)));
    assert!(policy.access(1, false).hit);
    assert_eq!(policy.access(2, false).victim, Some(Page::new(1, false)));

    let ids: Vec<u64> = policy.residents().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 2]);
    assert_eq!(policy.clock(), 5);
}

#[test]
fn hit_refreshes_next_use() {
    let trace = reads(&[1, 2, 1, 3, 2, 1]);
    let mut policy = BeladyMinBuilder::new(2).trace(&trace).build().unwrap();
    let _ = policy.access(1, false);
    let _ = policy.access(2, false);
    let _ = policy.access(1, false);
    assert_eq!(policy.next_use(1), NextUse::At(5));

    // Page 1 (next at 5) is farther away than page 2 (next at 4).
    assert_eq!(policy.access(3, false).victim, Some(Page::new(1, false)));
}

#[test]
fn dirty_flag_survives_until_eviction() {
    let trace = trace_of(&[(1, 'r'), (1, 'w'), (1, 'r'), (2, 'r'), (3, 'r')]);
    let mut policy = BeladyMinBuilder::new(1).trace(&trace).build().unwrap();
    for access in &trace {
        let outcome = policy.access(access.page_id, access.is_write);
        if access.page_id == 2 {
            assert_eq!(outcome.victim, Some(Page::new(1, true)));
        }
    }
}

#[test]
fn accesses_beyond_the_trace_are_treated_as_never_reused() {
    let trace = reads(&[1]);
    let mut policy = BeladyMinBuilder::new(2).trace(&trace).build().unwrap();
    let _ = policy.access(1, false);
    let _ = policy.access(2, false);
    let _ = policy.access(3, false);
    assert_eq!(policy.len(), 2);
    assert!(policy.contains(3));
}

// ══════════════════════════════════════════════════════════
// 4. Optimality
// ══════════════════════════════════════════════════════════

#[test]
fn never_misses_more_than_lru_on_cyclic_trace() {
    // A loop one page larger than the cache defeats LRU completely.
    let pages: Vec<u64> = (0..40).map(|i| i % 5).collect();
    let trace = reads(&pages);

    let mut lru = LruPolicy::new(4).unwrap();
    let mut opt = BeladyMinBuilder::new(4).trace(&trace).build().unwrap();
    let lru_misses = replay(&mut lru, &trace);
    let opt_misses = replay(&mut opt, &trace);

    assert_eq!(lru_misses, 40);
    assert!(opt_misses < lru_misses);
}

#[test]
fn compulsory_misses_only_when_working_set_fits() {
    let trace = reads(&[1, 2, 3, 1, 2, 3, 3, 2, 1]);
    let mut opt = BeladyMinBuilder::new(3).trace(&trace).build().unwrap();
    assert_eq!(replay(&mut opt, &trace), 3);
}
