//! LRU Policy Tests.
//!
//! Verifies recency ordering, victim selection and dirty-flag handling of
//! the plain LRU baseline.

use pagesim_core::ReplacementPolicy;
use pagesim_core::common::{Page, SimError};
use pagesim_core::policy::LruPolicy;
use pretty_assertions::assert_eq;

fn ids(policy: &LruPolicy) -> Vec<u64> {
    policy.residents().iter().map(|p| p.id).collect()
}

#[test]
fn zero_capacity_is_rejected() {
    let err = LruPolicy::new(0).unwrap_err();
    assert!(matches!(err, SimError::InvalidCapacity { capacity: 0 }));
}

#[test]
fn fills_without_eviction_until_capacity() {
    let mut lru = LruPolicy::new(3).unwrap();
    for id in 1..=3 {
        let outcome = lru.access(id, false);
        assert!(!outcome.hit);
        assert_eq!(outcome.victim, None);
    }
    assert_eq!(lru.len(), 3);
    assert_eq!(ids(&lru), vec![1, 2, 3]);
}

/// Capacity 2, reads 1 2 1 3: miss, miss, hit, miss evicting page 2.
#[test]
fn reaccessed_page_survives_next_eviction() {
    let mut lru = LruPolicy::new(2).unwrap();
    let outcomes: Vec<_> = [1, 2, 1, 3].into_iter().map(|id| lru.access(id, false)).collect();

    let hits: Vec<bool> = outcomes.iter().map(|o| o.hit).collect();
    assert_eq!(hits, vec![false, false, true, false]);
    assert_eq!(outcomes[3].victim, Some(Page::new(2, false)));
    assert!(lru.contains(1));
}

/// 1, 2, 3, then re-access 1: the LRU page is now 2.
#[test]
fn evicts_least_recently_used_after_reaccess() {
    let mut lru = LruPolicy::new(3).unwrap();
    for id in [1, 2, 3] {
        let _ = lru.access(id, false);
    }
    assert!(lru.access(1, false).hit);
    assert_eq!(ids(&lru), vec![2, 3, 1]);

    let outcome = lru.access(4, true);
    assert!(!outcome.hit);
    assert_eq!(outcome.victim, Some(Page::new(2, false)));
    assert_eq!(ids(&lru), vec![3, 1, 4]);
    assert!(!lru.contains(2));
}

#[test]
fn write_hit_marks_dirty_and_read_hit_keeps_it() {
    let mut lru = LruPolicy::new(2).unwrap();
    let _ = lru.access(7, false);
    assert!(lru.access(7, true).hit);
    assert!(lru.access(7, false).hit);
    assert_eq!(lru.residents(), vec![Page::new(7, true)]);
}

#[test]
fn dirty_victim_is_reported_dirty() {
    let mut lru = LruPolicy::new(1).unwrap();
    let _ = lru.access(1, true);
    let outcome = lru.access(2, false);
    assert_eq!(outcome.victim, Some(Page::new(1, true)));
    assert_eq!(lru.residents(), vec![Page::new(2, false)]);
}

#[test]
fn capacity_one_always_evicts_on_miss() {
    let mut lru = LruPolicy::new(1).unwrap();
    assert_eq!(lru.access(1, false).victim, None);
    assert!(lru.access(1, false).hit);
    for id in 2..6 {
        let outcome = lru.access(id, false);
        assert_eq!(outcome.victim.map(|p| p.id), Some(id - 1));
    }
    assert_eq!(lru.len(), 1);
}

#[test]
fn reports_name_and_capacity() {
    let lru = LruPolicy::new(8).unwrap();
    assert_eq!(lru.name(), "Standard LRU");
    assert_eq!(lru.capacity(), 8);
    assert!(lru.is_empty());
}
